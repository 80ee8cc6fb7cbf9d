//! User settings for nestegg
//!
//! Manages user preferences: currency formatting, the projection engine's
//! default annual rate, and advisor tuning knobs.

use serde::{Deserialize, Serialize};

use super::paths::NesteggPaths;
use crate::error::NesteggError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default annual interest rate used by `project` when none is given
    #[serde(default = "default_annual_rate")]
    pub default_annual_rate: f64,

    /// Advisor cache lifetime in minutes
    #[serde(default = "default_advice_cache_minutes")]
    pub advice_cache_minutes: i64,

    /// Whether initial setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_annual_rate() -> f64 {
    0.05
}

fn default_advice_cache_minutes() -> i64 {
    60
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_annual_rate: default_annual_rate(),
            advice_cache_minutes: default_advice_cache_minutes(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &NesteggPaths) -> Result<Self, NesteggError> {
        let path = paths.settings_file();
        if path.exists() {
            read_json(&path)
        } else {
            paths.ensure_directories()?;
            let settings = Self::default();
            write_json_atomic(&path, &settings)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &NesteggPaths) -> Result<(), NesteggError> {
        write_json_atomic(paths.settings_file(), self)
    }
}
