use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use charta_time::{DateStyle, DecomposeOptions, SecondBias};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "charta.toml";

/// Top-level charta configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartaConfig {
    /// Date rendering defaults.
    #[serde(default)]
    pub time: TimeToml,

    /// DMS rendering defaults.
    #[serde(default)]
    pub angle: AngleToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeToml {
    /// Offset east of UTC in seconds.
    #[serde(default)]
    pub offset_seconds: f64,
    /// Second-rounding bias in milliseconds; the standard bias when absent.
    #[serde(default)]
    pub second_bias_ms: Option<f64>,
    #[serde(default = "default_style")]
    pub style: String,
    /// Show seconds in formatted times.
    #[serde(default = "default_true")]
    pub seconds: bool,
}

impl Default for TimeToml {
    fn default() -> Self {
        Self {
            offset_seconds: 0.0,
            second_bias_ms: None,
            style: default_style(),
            seconds: true,
        }
    }
}

impl TimeToml {
    pub fn date_style(&self) -> Result<DateStyle> {
        self.style
            .parse::<DateStyle>()
            .with_context(|| format!("invalid [time] style in config: {:?}", self.style))
    }

    /// Decomposition options, with `bias_ms` taking precedence over the file.
    pub fn decompose_options(&self, bias_ms: Option<f64>) -> DecomposeOptions {
        let bias = bias_ms
            .or(self.second_bias_ms)
            .map_or(SecondBias::Standard, SecondBias::from_millis);
        DecomposeOptions::default().with_second_bias(bias)
    }
}

fn default_style() -> String {
    DateStyle::default().code().to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AngleToml {
    /// Decimal places of DMS seconds.
    #[serde(default = "default_precision")]
    pub precision: u32,
    #[serde(default)]
    pub zero_pad_degrees: bool,
}

impl Default for AngleToml {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            zero_pad_degrees: false,
        }
    }
}

fn default_precision() -> u32 {
    3
}

/// Load the config from `path`, or from [`DEFAULT_CONFIG_PATH`] when it
/// exists. A missing default file yields the built-in defaults; a missing
/// explicit file is an error.
pub fn load(path: Option<&Path>) -> Result<ChartaConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                tracing::debug!("no {DEFAULT_CONFIG_PATH}, using defaults");
                return Ok(ChartaConfig::default());
            }
            default
        }
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: ChartaConfig =
        toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}
