use std::fs;
use std::path::Path;

use amlich::{RangePolicy, TimeZone};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Year from which Vietnam keeps its calendar at UTC+7.
const VIETNAM_UTC7_SINCE: i32 = 1968;

/// Top-level configuration, read from TOML. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AmlichConfig {
    /// Which offset to compute the calendar at.
    #[serde(default)]
    pub time_zone: TimeZonePolicy,

    /// Handling of years outside the supported range.
    #[serde(default)]
    pub range: RangePolicy,

    /// Output format.
    #[serde(default)]
    pub output: OutputFormat,
}

/// How the time zone is chosen for a conversion.
#[derive(Debug, Copy, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum TimeZonePolicy {
    /// UTC+8 before 1968, UTC+7 from 1968 on.
    #[default]
    Vietnam,
    /// One offset, in hours, for every year.
    Fixed(TimeZone),
}

impl TimeZonePolicy {
    pub fn for_year(self, year: i32) -> TimeZone {
        match self {
            TimeZonePolicy::Vietnam if year < VIETNAM_UTC7_SINCE => TimeZone::CST,
            TimeZonePolicy::Vietnam => TimeZone::ICT,
            TimeZonePolicy::Fixed(tz) => tz,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Reads the configuration file, or the defaults when there is none.
pub fn load(path: Option<&Path>) -> Result<AmlichConfig> {
    let Some(path) = path else {
        return Ok(AmlichConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn parse(text: &str) -> Result<AmlichConfig> {
    Ok(toml::from_str(text)?)
}
