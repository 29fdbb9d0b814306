use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Julian Day and DMS conversions for chart data.
#[derive(Parser)]
#[command(
    name = "charta",
    version,
    about = "Julian Day, calendar and DMS conversions"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./charta.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Civil date/time string to Julian Day.
    Jd(JdArgs),
    /// Julian Day to a formatted civil date.
    Date(DateArgs),
    /// Current Julian Day and civil date.
    Now(NowArgs),
    /// Decimal degrees to DMS text.
    Dms(DmsArgs),
    /// DMS text to decimal degrees.
    ParseDms(ParseDmsArgs),
    /// Nearest day boundary for an offset or a longitude.
    Noon(NoonArgs),
    /// Natural timezone offset for a longitude.
    Tz(TzArgs),
}

/// Arguments for the `jd` subcommand.
#[derive(clap::Args)]
pub struct JdArgs {
    /// Date string, YYYY-MM-DD[THH:MM[:SS[.fff]]][Z|±HH:MM].
    pub date: String,

    /// Offset east of UTC in seconds at which a local-form string is read.
    #[arg(short, long, allow_negative_numbers = true)]
    pub offset: Option<f64>,

    /// Remove only the host offset (read local-form strings as UTC).
    #[arg(long, conflicts_with = "offset")]
    pub auto: bool,

    /// Do not compensate the host offset when an explicit offset is given.
    #[arg(long)]
    pub uncompensated: bool,

    /// Pin the host offset in seconds instead of reading the system zone.
    #[arg(long, allow_negative_numbers = true)]
    pub host_offset: Option<i32>,
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Julian Day.
    pub jd: f64,

    /// Offset east of UTC in seconds (overrides config).
    #[arg(short, long, allow_negative_numbers = true)]
    pub offset: Option<f64>,

    /// Date style: dmy, mdy, dm, euroDot, euroHyphen, iso, isoT, extended or -.
    #[arg(short, long)]
    pub style: Option<String>,

    /// Omit the time of day.
    #[arg(long)]
    pub no_time: bool,

    /// Omit seconds from the time of day.
    #[arg(long)]
    pub no_seconds: bool,

    /// Second-rounding bias in milliseconds, within (-1000, 1000).
    #[arg(long, allow_negative_numbers = true)]
    pub bias_ms: Option<f64>,

    /// Print every decomposed field as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Decompose in UTC rather than the host zone.
    #[arg(long)]
    pub utc: bool,

    /// Date style for the civil date.
    #[arg(short, long)]
    pub style: Option<String>,

    /// Print every decomposed field as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `dms` subcommand.
#[derive(clap::Args)]
pub struct DmsArgs {
    /// Angle in decimal degrees.
    #[arg(allow_negative_numbers = true)]
    pub deg: f64,

    /// Kind: raw, prefix, lat, lng, mlat or mlng.
    #[arg(short, long, default_value = "raw")]
    pub kind: String,

    /// Decimal places of the seconds (overrides config).
    #[arg(short, long)]
    pub precision: Option<u32>,

    /// Degrees and minutes only.
    #[arg(long, conflicts_with = "precision")]
    pub no_seconds: bool,

    /// Omit minutes and seconds when both are zero.
    #[arg(long)]
    pub flexi: bool,

    /// Pad degrees to two digits.
    #[arg(long)]
    pub zero_pad: bool,
}

/// Arguments for the `parse-dms` subcommand.
#[derive(clap::Args)]
pub struct ParseDmsArgs {
    /// DMS text, e.g. "51º 30' 26\" N".
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Read whole-number parts for an axis (lat or lng) instead of a value.
    #[arg(short, long)]
    pub axis: Option<String>,

    /// Print the parse result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `noon` subcommand.
#[derive(clap::Args)]
pub struct NoonArgs {
    /// Julian Day.
    pub jd: f64,

    /// Offset east of UTC in seconds.
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "lng")]
    pub offset: Option<f64>,

    /// Longitude in degrees east, for local solar day boundaries.
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Snap to local midnight instead of noon (with --lng).
    #[arg(long, requires = "lng")]
    pub midnight: bool,
}

/// Arguments for the `tz` subcommand.
#[derive(clap::Args)]
pub struct TzArgs {
    /// Longitude in degrees east.
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,
}
