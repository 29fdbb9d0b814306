//! DMS subcommands: dms, parse-dms.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use charta_angle::{
    AngleKind, Axis, DmsFormat, dec_places, dms_string_to_parts, try_format_dms,
    try_parse_dms_string,
};

use crate::cli::{DmsArgs, ParseDmsArgs};
use crate::config::ChartaConfig;

/// Render decimal degrees as DMS text.
pub fn dms(args: DmsArgs, config: &ChartaConfig) -> Result<()> {
    let _cmd = info_span!("dms").entered();
    let kind: AngleKind = args
        .kind
        .parse()
        .with_context(|| format!("invalid --kind {:?}", args.kind))?;

    let precision = if args.no_seconds {
        None
    } else {
        Some(args.precision.unwrap_or(config.angle.precision))
    };
    let format = DmsFormat::default()
        .with_kind(kind)
        .with_precision(precision)
        .with_zero_pad_degrees(args.zero_pad || config.angle.zero_pad_degrees)
        .with_full_mode(!args.flexi);
    debug!(?format, "formatting angle");

    let text = try_format_dms(args.deg, &format)?;
    println!("{text}");
    Ok(())
}

/// Parse DMS text into decimal degrees, or into whole parts with `--axis`.
pub fn parse_dms(args: ParseDmsArgs) -> Result<()> {
    let _cmd = info_span!("parse_dms").entered();

    if let Some(axis) = &args.axis {
        let axis: Axis = axis
            .parse()
            .with_context(|| format!("invalid --axis {axis:?}"))?;
        let parts = dms_string_to_parts(&args.text, axis);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&parts)?);
        } else {
            println!("{parts}");
        }
        return Ok(());
    }

    let parsed = try_parse_dms_string(&args.text)
        .with_context(|| format!("cannot parse {:?}", args.text))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("{}", dec_places(parsed.value, 6));
    }
    Ok(())
}
