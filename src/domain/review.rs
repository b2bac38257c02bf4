//! Selection of entries that are old enough to be reviewed

use crate::domain::calendar::days_before;
use crate::domain::entry::{EntryCollection, JournalEntry};
use chrono::{DateTime, Utc};

/// Default age, in days, at which an entry is due for review
pub const REVIEW_AFTER_DAYS: u32 = 7;

/// Entries written at least a week before `now`, in stored order
pub fn entries_due_for_review(entries: &EntryCollection, now: DateTime<Utc>) -> Vec<JournalEntry> {
    entries_due_after(entries, now, REVIEW_AFTER_DAYS)
}

/// Entries written at least `days` local calendar days before `now`, in stored order
pub fn entries_due_after(
    entries: &EntryCollection,
    now: DateTime<Utc>,
    days: u32,
) -> Vec<JournalEntry> {
    let cutoff = days_before(now, days);
    entries
        .iter()
        .filter(|e| e.date <= cutoff)
        .cloned()
        .collect()
}
