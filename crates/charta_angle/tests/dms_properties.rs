//! Integration tests for DMS conversion, parsing and formatting.

use charta_angle::{
    AngleKind, Compass, DmsFormat, ParsedDms, decimal_to_dms, dms_string_to_decimal,
    dms_to_decimal, format_dms, lat_string, lng_string, parse_dms_string,
};

// ---------------------------------------------------------------------------
// Decimal ⟷ DMS
// ---------------------------------------------------------------------------

#[test]
fn decimal_round_trip_sweep() {
    for i in -1800..=1800 {
        let x = f64::from(i) * 0.1 + 0.012_345;
        let back = dms_to_decimal(&decimal_to_dms(x));
        assert!((back - x).abs() < 1.0 / 3600.0, "{x} -> {back}");
    }
}

#[test]
fn negative_whole_degrees_round_trip() {
    for d in [-180.0, -90.0, -45.0, -1.0] {
        assert_eq!(dms_to_decimal(&decimal_to_dms(d)), d);
    }
}

// ---------------------------------------------------------------------------
// Formatting then parsing
// ---------------------------------------------------------------------------

#[test]
fn formatted_coordinates_parse_back() {
    for lat in [-89.999, -51.477_8, -0.5, 0.25, 33.868_8, 89.5] {
        let back = dms_string_to_decimal(&lat_string(lat));
        assert!((back - lat).abs() < 1.0 / 3600.0, "{lat} -> {back}");
    }
    for lng in [-179.9, -122.419_4, -0.127_5, 2.352_2, 151.209_3, 180.0] {
        let back = dms_string_to_decimal(&lng_string(lng));
        assert!((back - lng).abs() < 1.0 / 3600.0, "{lng} -> {back}");
    }
}

#[test]
fn raw_format_parses_back_with_sign() {
    let text = format_dms(-12.5, &DmsFormat::default());
    assert_eq!(text, "-12º 30' 00\"");
    assert_eq!(dms_string_to_decimal(&text), -12.5);
}

#[test]
fn mid_letter_parses_back() {
    let format = DmsFormat::default().with_kind(AngleKind::MidLng);
    let text = format_dms(-73.5, &format);
    assert_eq!(text, "73º W 30' 00\"");
    let parsed = parse_dms_string(&text);
    assert_eq!(parsed.value, -73.5);
    assert_eq!(parsed.direction, Some(Compass::W));
}

// ---------------------------------------------------------------------------
// Carry, clamping, defaults
// ---------------------------------------------------------------------------

#[test]
fn seconds_rounding_to_sixty_carries() {
    let value = 10.0 + 29.0 / 60.0 + 59.996 / 3600.0;
    let format = DmsFormat::default().with_precision(Some(2));
    assert_eq!(format_dms(value, &format), "10º 30' 00\"");
}

#[test]
fn clamped_by_direction() {
    assert_eq!(dms_string_to_decimal("95 00 00 N"), 90.0);
    assert_eq!(dms_string_to_decimal("185 00 00 W"), -180.0);
}

#[test]
fn malformed_defaults() {
    let parsed = parse_dms_string("not an angle");
    assert_eq!(parsed, ParsedDms::default());
    assert_eq!(parsed.direction, None);
    assert_eq!(format_dms(parsed.value, &DmsFormat::default()), "0º 00' 00\"");
}
