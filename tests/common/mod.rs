#![allow(dead_code)]

use assert_cmd::Command;
use manifest::domain::EntryCollection;
use manifest::infrastructure::{EntryStore, FileSystemRepository};
use std::path::Path;

pub fn manifest_cmd() -> Command {
    let mut cmd = Command::cargo_bin("manifest").unwrap();
    cmd.env_remove("MANIFEST_ROOT");
    cmd.env_remove("MANIFEST_LOG");
    cmd
}

/// Initialize a journal in `path` through the binary
pub fn init_journal(path: &Path) {
    manifest_cmd().arg("init").arg(path).assert().success();
}

/// Overwrite the stored entries directly, bypassing the daily limit
pub fn seed_entries(path: &Path, entries: &EntryCollection) {
    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.save_entries(entries).unwrap();
}

pub fn stored_entries(path: &Path) -> EntryCollection {
    FileSystemRepository::new(path.to_path_buf()).load()
}
