//! Error types for manifest

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for manifest application
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Not a manifest directory: {0}")]
    NotManifestDirectory(PathBuf),

    #[error("Entry text is empty")]
    EmptyInput,

    #[error("Daily limit of {limit} entries reached")]
    QuotaExceeded { limit: usize },

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Ambiguous entry id: {0}")]
    AmbiguousEntryId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ManifestError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ManifestError::NotManifestDirectory(_) => 2,
            ManifestError::EntryNotFound(_) | ManifestError::AmbiguousEntryId(_) => 3,
            ManifestError::QuotaExceeded { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ManifestError::NotManifestDirectory(path) => {
                format!(
                    "Not a manifest directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'manifest init' in this directory to start a journal\n\
                    • Navigate to an existing journal directory\n\
                    • Set MANIFEST_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            ManifestError::EmptyInput => "Entry text is empty\n\n\
                Write about an event you wish to experience, in past tense, \
                as if it has already happened.\n\
                Example: manifest add \"Got a free coffee\""
                .to_string(),
            ManifestError::QuotaExceeded { limit } => {
                format!(
                    "You have already written your {} entries for today.\n\n\
                    Come back tomorrow, or check 'manifest review' for entries \
                    from last week.",
                    limit
                )
            }
            ManifestError::EntryNotFound(id) | ManifestError::AmbiguousEntryId(id) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use 'manifest review' to see the ids of entries due for review\n\
                    • Type more characters of the id if several entries share '{}'",
                    self, id
                )
            }
            ManifestError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: manifest config reminder_enabled true",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ManifestError
pub type Result<T> = std::result::Result<T, ManifestError>;
