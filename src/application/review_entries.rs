//! Weekly review use case

use crate::domain::{entries_due_after, EntryCollection, JournalEntry};
use crate::error::{ManifestError, Result};
use crate::infrastructure::EntryStore;
use chrono::{DateTime, Utc};
use log::warn;
use uuid::Uuid;

/// Flip the completed flag of one entry and persist the whole collection.
///
/// The last entry date is left alone so that reviewing does not count as
/// writing for the daily reset.
pub fn toggle_completion<S: EntryStore>(
    store: &S,
    entries: &mut EntryCollection,
    entry_id: Uuid,
) -> Result<bool> {
    let completed = entries.toggle_completion(entry_id).inspect_err(|_| {
        warn!("toggle requested for unknown entry {}", entry_id);
    })?;
    store.save_entries(entries)?;
    Ok(completed)
}

/// Service listing entries due for review and recording whether they came true
pub struct ReviewService<S: EntryStore> {
    store: S,
    review_after_days: u32,
}

impl<S: EntryStore> ReviewService<S> {
    pub fn new(store: S, review_after_days: u32) -> Self {
        ReviewService {
            store,
            review_after_days,
        }
    }

    /// Entries old enough to review at `now`, in stored order
    pub fn entries_due(&self, now: DateTime<Utc>) -> Vec<JournalEntry> {
        entries_due_after(&self.store.load(), now, self.review_after_days)
    }

    /// Toggle an entry by exact id
    pub fn toggle(&self, entry_id: Uuid) -> Result<bool> {
        let mut entries = self.store.load();
        toggle_completion(&self.store, &mut entries, entry_id)
    }

    /// Toggle a due entry identified by its id or a unique id prefix.
    ///
    /// Only entries due for review at `now` can be matched. Returns the
    /// entry with its new completed flag.
    pub fn toggle_due(&self, query: &str, now: DateTime<Utc>) -> Result<JournalEntry> {
        let mut entries = self.store.load();
        let due: EntryCollection =
            entries_due_after(&entries, now, self.review_after_days).into();

        let id = due.resolve_id(query)?;
        toggle_completion(&self.store, &mut entries, id)?;

        entries
            .get(id)
            .cloned()
            .ok_or_else(|| ManifestError::EntryNotFound(id.to_string()))
    }
}
