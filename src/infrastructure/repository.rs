//! File system repository

use crate::domain::EntryCollection;
use crate::error::{ManifestError, Result};
use crate::infrastructure::{Config, EntryStore};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_DIR: &str = ".manifest";
const ENTRIES_FILE: &str = "entries.json";
const LAST_ENTRY_DATE_FILE: &str = "last_entry_date";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Load configuration from .manifest/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .manifest/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .manifest directory exists
    fn is_initialized(&self) -> bool;

    /// Create .manifest directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository and EntryStore
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MANIFEST_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MANIFEST_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_manifest_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ManifestError::Config(format!(
                    "MANIFEST_ROOT is set to '{}' but no .manifest directory found. \
                    Run 'manifest init' in that directory or unset MANIFEST_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_manifest_dir(&current) {
                debug!("journal root found at {}", current.display());
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ManifestError::NotManifestDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_manifest_dir(path: &Path) -> bool {
        path.join(MANIFEST_DIR).is_dir()
    }

    fn data_path(&self, name: &str) -> PathBuf {
        self.root.join(MANIFEST_DIR).join(name)
    }

    /// Replace a file under .manifest by writing a temp file next to it and
    /// renaming it into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    /// The temp file is removed again if any step fails.
    fn write_atomic(&self, name: &str, content: &str) -> Result<()> {
        let path = self.data_path(name);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = path.with_file_name(format!("{}.tmp-{}", name, std::process::id()));
        let replaced = fs::write(&tmp_path, content).and_then(|_| {
            if cfg!(windows) && path.exists() {
                fs::remove_file(&path)?;
            }
            fs::rename(&tmp_path, &path)
        });

        if let Err(e) = replaced {
            if tmp_path.exists() {
                let _ = fs::remove_file(&tmp_path);
            }
            warn!("failed to write {}: {}", path.display(), e);
            return Err(ManifestError::Io(e));
        }
        Ok(())
    }

    /// Read a data file; `None` when missing or unreadable
    fn read_data(&self, name: &str) -> Option<String> {
        let path = self.data_path(name);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no {} found, starting empty", name);
                None
            }
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl JournalRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_manifest_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let manifest_dir = self.root.join(MANIFEST_DIR);

        if manifest_dir.exists() {
            return Err(ManifestError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&manifest_dir)?;
        Ok(())
    }
}

impl EntryStore for FileSystemRepository {
    fn load(&self) -> EntryCollection {
        let Some(contents) = self.read_data(ENTRIES_FILE) else {
            return EntryCollection::new();
        };

        match serde_json::from_str::<EntryCollection>(&contents) {
            Ok(entries) => {
                debug!("loaded {} entries", entries.len());
                entries
            }
            Err(e) => {
                warn!("failed to decode {}: {}; treating as empty", ENTRIES_FILE, e);
                EntryCollection::new()
            }
        }
    }

    fn save_entries(&self, entries: &EntryCollection) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        self.write_atomic(ENTRIES_FILE, &json)?;
        debug!("saved {} entries", entries.len());
        Ok(())
    }

    fn load_last_entry_date(&self) -> Option<DateTime<Utc>> {
        let contents = self.read_data(LAST_ENTRY_DATE_FILE)?;
        match DateTime::parse_from_rfc3339(contents.trim()) {
            Ok(date) => Some(date.with_timezone(&Utc)),
            Err(e) => {
                warn!("ignoring unreadable last entry date {:?}: {}", contents.trim(), e);
                None
            }
        }
    }

    fn save_last_entry_date(&self, date: DateTime<Utc>) -> Result<()> {
        self.write_atomic(LAST_ENTRY_DATE_FILE, &date.to_rfc3339())?;
        debug!("last entry date set to {}", date.to_rfc3339());
        Ok(())
    }
}
