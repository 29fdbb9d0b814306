//! Julian Day subcommands: jd, date, now, noon, tz.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use charta_time::render::{MIN_DISPLAY_JD, PLACEHOLDER};
use charta_time::{
    DateStringConverter, DateStyle, FixedLocalOffset, JulianDate, OffsetMode, TimeOptions,
    current_julian_date, format_utc_offset, julian_day_geo_offset_to_start,
    julian_day_offset_to_noon, natural_tz_offset,
};

use crate::cli::{DateArgs, JdArgs, NoonArgs, NowArgs, TzArgs};
use crate::config::ChartaConfig;

/// Convert a date string to a Julian Day.
pub fn jd(args: JdArgs, config: &ChartaConfig) -> Result<()> {
    let _cmd = info_span!("jd").entered();
    let offset = args.offset.unwrap_or(config.time.offset_seconds);
    let mode = OffsetMode::from_flags(args.auto, offset, !args.uncompensated);
    debug!(?mode, host_offset = ?args.host_offset, "converting date string");

    let jd = match args.host_offset {
        Some(host) => DateStringConverter::with_source(FixedLocalOffset(host))
            .try_date_to_julian_day(&args.date, mode),
        None => DateStringConverter::new().try_date_to_julian_day(&args.date, mode),
    }
    .with_context(|| format!("cannot convert {:?}", args.date))?;

    println!("{jd}");
    Ok(())
}

/// Render a Julian Day as a civil date.
pub fn date(args: DateArgs, config: &ChartaConfig) -> Result<()> {
    let _cmd = info_span!("date").entered();
    let offset = args.offset.unwrap_or(config.time.offset_seconds);
    let style = resolve_style(args.style.as_deref(), config)?;
    let options = TimeOptions {
        time: !args.no_time,
        seconds: config.time.seconds && !args.no_seconds,
    };

    let decompose = config.time.decompose_options(args.bias_ms);
    let date = JulianDate::with_options(args.jd, offset, decompose);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&date)?);
    } else if args.jd > MIN_DISPLAY_JD {
        println!("{}", date.format(style, options));
    } else {
        println!("{PLACEHOLDER}");
    }
    Ok(())
}

/// Print the current Julian Day and civil date.
pub fn now(args: NowArgs, config: &ChartaConfig) -> Result<()> {
    let style = resolve_style(args.style.as_deref(), config)?;
    let date = current_julian_date(args.utc);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&date)?);
    } else {
        println!("{:.6}", date.jd);
        println!(
            "{} ({})",
            date.format(style, TimeOptions::default()),
            date.offset_hm()
        );
    }
    Ok(())
}

/// Snap a Julian Day to the nearest noon, or local solar day boundary.
pub fn noon(args: NoonArgs, config: &ChartaConfig) -> Result<()> {
    let result = match args.lng {
        Some(lng) => julian_day_geo_offset_to_start(args.jd, lng, !args.midnight),
        None => {
            let offset = args.offset.unwrap_or(config.time.offset_seconds);
            julian_day_offset_to_noon(args.jd, offset)
        }
    };
    println!("{result:.6}");
    Ok(())
}

/// Print the natural 15° zone offset for a longitude.
pub fn tz(args: TzArgs) -> Result<()> {
    let offset = natural_tz_offset(args.lng);
    println!("{offset} ({})", format_utc_offset(f64::from(offset), true, true));
    Ok(())
}

fn resolve_style(flag: Option<&str>, config: &ChartaConfig) -> Result<DateStyle> {
    match flag {
        Some(code) => code
            .parse::<DateStyle>()
            .with_context(|| format!("invalid --style {code:?}")),
        None => config.time.date_style(),
    }
}
