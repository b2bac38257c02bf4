//! Success rate and streak statistics
//!
//! Pure functions over an entry collection. Streaks count consecutive local
//! calendar days that have at least one entry.

use crate::domain::entry::{EntryCollection, JournalEntry};
use chrono::NaiveDate;

/// Summary shown on the progress screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    /// `None` when there are no entries (distinct from 0%)
    pub success_rate: Option<u8>,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Progress {
    pub fn from_entries(entries: &EntryCollection) -> Self {
        let (current_streak, best_streak) = walk_streaks(entries);
        Progress {
            total: entries.len(),
            completed: entries.completed_count(),
            success_rate: success_rate(entries),
            current_streak,
            best_streak,
        }
    }
}

/// Percentage of completed entries, truncated; `None` for an empty collection
pub fn success_rate(entries: &EntryCollection) -> Option<u8> {
    let total = entries.len();
    if total == 0 {
        return None;
    }
    let completed = entries.completed_count();
    Some((completed * 100 / total) as u8)
}

/// Streak ending at the chronologically last entry.
///
/// This is not "streak as of today": an old latest entry still reports the
/// streak it ended.
pub fn current_streak(entries: &EntryCollection) -> usize {
    walk_streaks(entries).0
}

/// Longest streak observed anywhere in the collection
pub fn best_streak(entries: &EntryCollection) -> usize {
    walk_streaks(entries).1
}

fn walk_streaks(entries: &EntryCollection) -> (usize, usize) {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);
    streak_over_days(sorted.into_iter().map(JournalEntry::day))
}

/// Walk ascending days, returning (final streak, best streak).
///
/// Next calendar day extends the streak, the same day leaves it unchanged,
/// any gap restarts it at 1.
fn streak_over_days<I>(days: I) -> (usize, usize)
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut streak = 0;
    let mut best = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in days {
        streak = match previous {
            None => 1,
            Some(prev) if prev == day => streak,
            Some(prev) if prev.succ_opt() == Some(day) => streak + 1,
            Some(_) => 1,
        };
        best = best.max(streak);
        previous = Some(day);
    }

    (streak, best)
}
