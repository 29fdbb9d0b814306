//! Small numeric helpers for angle display.

/// `value` to `places` decimals with trailing zeros and a bare trailing dot
/// removed. Negative zero renders as `0`; non-finite values render as `""`.
pub fn dec_places(value: f64, places: u32) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let fixed = format!("{value:.prec$}", prec = places as usize);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Angle from `a` to `b`, scaled by `multiplier` and normalised into [0, 360).
pub fn relative_angle(a: f64, b: f64, multiplier: f64) -> f64 {
    let r = ((b - a) * multiplier) % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
