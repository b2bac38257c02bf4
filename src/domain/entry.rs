//! Journal entries and the entry collection

use crate::domain::calendar::local_day;
use crate::error::{ManifestError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single manifestation statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub date: DateTime<Utc>,
}

impl JournalEntry {
    /// Create a new, not yet completed entry with a fresh id
    pub fn new(text: impl Into<String>, date: DateTime<Utc>) -> Self {
        JournalEntry {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            date,
        }
    }

    /// Local calendar day the entry was written on
    pub fn day(&self) -> NaiveDate {
        local_day(self.date)
    }

    /// First eight hex digits of the id, as shown in listings
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Ordered entries, in creation order.
///
/// Serializes as a plain JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection {
    entries: Vec<JournalEntry>,
}

impl EntryCollection {
    pub fn new() -> Self {
        EntryCollection::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JournalEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Append an entry at the end (creation order)
    pub fn push(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: Uuid) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.completed).count()
    }

    /// Entries written on the given local day
    pub fn entries_on(&self, day: NaiveDate) -> Vec<&JournalEntry> {
        self.entries.iter().filter(|e| e.day() == day).collect()
    }

    /// Flip the completed flag of an entry, returning its new value
    pub fn toggle_completion(&mut self, id: Uuid) -> Result<bool> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ManifestError::EntryNotFound(id.to_string()))?;

        entry.completed = !entry.completed;
        Ok(entry.completed)
    }

    /// Resolve a full id or a unique id prefix to an entry id
    pub fn resolve_id(&self, query: &str) -> Result<Uuid> {
        let needle = query.trim().to_lowercase().replace('-', "");
        if needle.is_empty() {
            return Err(ManifestError::EntryNotFound(query.to_string()));
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id.simple().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry.id),
            (Some(_), Some(_)) => Err(ManifestError::AmbiguousEntryId(query.to_string())),
            (None, _) => Err(ManifestError::EntryNotFound(query.to_string())),
        }
    }
}

impl From<Vec<JournalEntry>> for EntryCollection {
    fn from(entries: Vec<JournalEntry>) -> Self {
        EntryCollection { entries }
    }
}

impl FromIterator<JournalEntry> for EntryCollection {
    fn from_iter<I: IntoIterator<Item = JournalEntry>>(iter: I) -> Self {
        EntryCollection {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a JournalEntry;
    type IntoIter = std::slice::Iter<'a, JournalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
