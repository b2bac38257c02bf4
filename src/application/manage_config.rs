//! Config management use case

use crate::error::{ManifestError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

const VALID_KEYS: &str = "daily_limit, review_after_days, reminder_enabled, reminder_hour";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "daily_limit" => Ok(config.daily_limit.to_string()),
            "review_after_days" => Ok(config.review_after_days.to_string()),
            "reminder_enabled" => Ok(config.reminder_enabled.to_string()),
            "reminder_hour" => Ok(config.reminder_hour.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "daily_limit" => config.daily_limit = parse_number(key, value)?,
            "review_after_days" => config.review_after_days = parse_number(key, value)?,
            "reminder_enabled" => config.reminder_enabled = parse_switch(key, value)?,
            "reminder_hour" => config.reminder_hour = parse_number(key, value)?,
            "created" => {
                return Err(ManifestError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        config.validate()?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> ManifestError {
    ManifestError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ManifestError::Config(format!("Invalid {}: '{}' is not a number", key, value))
    })
}

fn parse_switch(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ManifestError::Config(format!(
            "Invalid {}: '{}' (expected true or false)",
            key, value
        ))),
    }
}
