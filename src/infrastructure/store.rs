//! Entry store - persistence of the entry collection and last entry date

use crate::domain::EntryCollection;
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Durable storage of exactly one entry collection and one "last entry date".
///
/// Loads never fail: missing or unreadable data is reported as "no data".
/// Saves overwrite the previous value as a whole.
pub trait EntryStore {
    /// Load the saved collection, or an empty one
    fn load(&self) -> EntryCollection;

    /// Overwrite the saved collection without touching the last entry date
    fn save_entries(&self, entries: &EntryCollection) -> Result<()>;

    /// Load the last entry date, if one was recorded
    fn load_last_entry_date(&self) -> Option<DateTime<Utc>>;

    /// Record the last entry date
    fn save_last_entry_date(&self, date: DateTime<Utc>) -> Result<()>;

    /// Overwrite the saved collection and stamp the last entry date with `now`
    fn save_at(&self, entries: &EntryCollection, now: DateTime<Utc>) -> Result<()> {
        self.save_entries(entries)?;
        self.save_last_entry_date(now)
    }

    /// Overwrite the saved collection and stamp the last entry date with the current time
    fn save(&self, entries: &EntryCollection) -> Result<()> {
        self.save_at(entries, Utc::now())
    }
}
