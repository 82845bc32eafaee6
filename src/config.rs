use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::common::data::Error;

pub const DEFAULT_LOOKUP_URL: &str = "https://csscolorsapi.com/api/colors";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Accept `RGB` shorthand as `RRGGBB`.
    pub allow_shorthand: bool,
    pub lookup_url: String,
    pub lookup_timeout_secs: u64,
    /// Entries kept by a `NameCache`; 0 disables caching.
    pub cache_capacity: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            allow_shorthand: true,
            lookup_url: DEFAULT_LOOKUP_URL.to_owned(),
            lookup_timeout_secs: 5,
            cache_capacity: 256,
        }
    }
}

impl AnalyzerConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// Defaults overridden by `BRIGHTEST_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(value) = var("BRIGHTEST_ALLOW_SHORTHAND") {
            config.allow_shorthand = parse_bool("BRIGHTEST_ALLOW_SHORTHAND", &value)?;
        }
        if let Some(value) = var("BRIGHTEST_LOOKUP_URL") {
            config.lookup_url = value;
        }
        if let Some(value) = var("BRIGHTEST_LOOKUP_TIMEOUT_SECS") {
            config.lookup_timeout_secs = value.trim().parse().map_err(|_| {
                Error::ConfigError(format!("BRIGHTEST_LOOKUP_TIMEOUT_SECS is not a number: {value}"))
            })?;
        }
        if let Some(value) = var("BRIGHTEST_CACHE_CAPACITY") {
            config.cache_capacity = value.trim().parse().map_err(|_| {
                Error::ConfigError(format!("BRIGHTEST_CACHE_CAPACITY is not a number: {value}"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.lookup_timeout_secs == 0 {
            return Err(Error::ConfigError(
                "lookup timeout must be at least one second".to_owned(),
            ));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::ConfigError(format!("{key} is not a boolean: {value}"))),
    }
}
