//! Configuration management

use crate::domain::REVIEW_AFTER_DAYS;
use crate::error::{ManifestError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of entries that can be written per day
pub const DEFAULT_DAILY_LIMIT: usize = 15;
const MAX_DAILY_LIMIT: usize = 100;
const MAX_REVIEW_AFTER_DAYS: u32 = 3650;
const DEFAULT_REMINDER_HOUR: u32 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_daily_limit")]
    pub daily_limit: usize,
    #[serde(default = "default_review_after_days")]
    pub review_after_days: u32,
    #[serde(default)]
    pub reminder_enabled: bool,
    #[serde(default = "default_reminder_hour")]
    pub reminder_hour: u32,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

fn default_daily_limit() -> usize {
    DEFAULT_DAILY_LIMIT
}

fn default_review_after_days() -> u32 {
    REVIEW_AFTER_DAYS
}

fn default_reminder_hour() -> u32 {
    DEFAULT_REMINDER_HOUR
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            daily_limit: DEFAULT_DAILY_LIMIT,
            review_after_days: REVIEW_AFTER_DAYS,
            reminder_enabled: false,
            reminder_hour: DEFAULT_REMINDER_HOUR,
            created: Utc::now(),
        }
    }

    /// Load config from .manifest/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".manifest").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestError::NotManifestDirectory(path.to_path_buf())
            } else {
                ManifestError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ManifestError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .manifest/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let manifest_dir = path.join(".manifest");
        let config_path = manifest_dir.join("config.toml");

        if !manifest_dir.exists() {
            fs::create_dir(&manifest_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Check that every value is within its allowed range
    pub fn validate(&self) -> Result<()> {
        if self.daily_limit == 0 || self.daily_limit > MAX_DAILY_LIMIT {
            return Err(ManifestError::Config(format!(
                "Invalid daily_limit: {} (must be between 1 and {})",
                self.daily_limit, MAX_DAILY_LIMIT
            )));
        }
        if self.review_after_days == 0 || self.review_after_days > MAX_REVIEW_AFTER_DAYS {
            return Err(ManifestError::Config(format!(
                "Invalid review_after_days: {} (must be between 1 and {})",
                self.review_after_days, MAX_REVIEW_AFTER_DAYS
            )));
        }
        if self.reminder_hour > 23 {
            return Err(ManifestError::Config(format!(
                "Invalid reminder_hour: {} (must be between 0 and 23)",
                self.reminder_hour
            )));
        }
        Ok(())
    }
}
