//! Daily entry submission use case
//!
//! `EntryService` is the session object that owns the loaded collection. It
//! enforces the daily limit and clears yesterday's entries on the first
//! submission of a new day.

use crate::domain::calendar::{is_same_local_day, local_day};
use crate::domain::{EntryCollection, JournalEntry};
use crate::error::{ManifestError, Result};
use crate::infrastructure::EntryStore;
use chrono::{DateTime, Utc};
use log::{debug, info};

/// Result of a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Number of entries after the submission
    pub count: usize,
    pub limit: usize,
    /// True when this submission filled the daily limit
    pub goal_reached: bool,
}

/// Entry submission session backed by an entry store
pub struct EntryService<S: EntryStore> {
    store: S,
    entries: EntryCollection,
    last_entry_date: Option<DateTime<Utc>>,
    limit: usize,
}

impl<S: EntryStore> EntryService<S> {
    /// Open a session, loading the current entries and last entry date from the store
    pub fn open(store: S, limit: usize) -> Self {
        let entries = store.load();
        let last_entry_date = store.load_last_entry_date();
        debug!(
            "entry session opened with {} entries, last entry date {:?}",
            entries.len(),
            last_entry_date
        );

        EntryService {
            store,
            entries,
            last_entry_date,
            limit,
        }
    }

    pub fn entries(&self) -> &EntryCollection {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.entries.len())
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    pub fn last_entry_date(&self) -> Option<DateTime<Utc>> {
        self.last_entry_date
    }

    /// True if the next submission at `now` will clear the stored entries first
    pub fn needs_reset(&self, now: DateTime<Utc>) -> bool {
        self.last_entry_date
            .is_some_and(|last| !is_same_local_day(last, now))
    }

    /// Entries that count toward the daily limit for a submission at `now`.
    ///
    /// Empty when the next submission will clear the collection; otherwise
    /// every stored entry counts, whatever day it was written on.
    pub fn todays_entries(&self, now: DateTime<Utc>) -> Vec<&JournalEntry> {
        if self.needs_reset(now) {
            return Vec::new();
        }
        self.entries.iter().collect()
    }

    /// Clear the collection if the last entry date is on another local day.
    ///
    /// With no recorded date, `now` is recorded and nothing is cleared.
    /// Returns true when entries were cleared.
    pub fn check_daily_reset(&mut self, now: DateTime<Utc>) -> Result<bool> {
        match self.last_entry_date {
            None => {
                self.store.save_last_entry_date(now)?;
                self.last_entry_date = Some(now);
                Ok(false)
            }
            Some(last) if is_same_local_day(last, now) => Ok(false),
            Some(last) => {
                info!(
                    "new day: clearing {} entries from {}",
                    self.entries.len(),
                    local_day(last)
                );
                self.entries.clear();
                self.store.save_at(&self.entries, now)?;
                self.last_entry_date = Some(now);
                Ok(true)
            }
        }
    }

    /// Submit a new entry written at `now`.
    ///
    /// The text is stored as given; only an empty string is rejected.
    pub fn submit(&mut self, text: &str, now: DateTime<Utc>) -> Result<SubmitOutcome> {
        self.check_daily_reset(now)?;

        if text.is_empty() {
            return Err(ManifestError::EmptyInput);
        }
        if self.is_full() {
            return Err(ManifestError::QuotaExceeded { limit: self.limit });
        }

        self.entries.push(JournalEntry::new(text, now));
        self.store.save_at(&self.entries, now)?;
        self.last_entry_date = Some(now);

        let count = self.entries.len();
        debug!("entry {}/{} submitted", count, self.limit);

        Ok(SubmitOutcome {
            count,
            limit: self.limit,
            goal_reached: count == self.limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::local_noon;
    use crate::infrastructure::{FileSystemRepository, JournalRepository, DEFAULT_DAILY_LIMIT};
    use chrono::Duration;
    use tempfile::TempDir;

    fn initialized_repo() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        (temp, repo)
    }

    fn service(repo: &FileSystemRepository) -> EntryService<FileSystemRepository> {
        EntryService::open(repo.clone(), DEFAULT_DAILY_LIMIT)
    }

    #[test]
    fn test_submit_appends_and_persists() {
        let (_temp, repo) = initialized_repo();
        let now = local_noon(2025, 1, 17);
        let mut service = service(&repo);

        let outcome = service.submit("Got a free coffee", now).unwrap();
        assert_eq!(outcome.count, 1);
        assert!(!outcome.goal_reached);

        let stored = repo.load();
        assert_eq!(stored.len(), 1);
        let entry = &stored.as_slice()[0];
        assert_eq!(entry.text, "Got a free coffee");
        assert!(!entry.completed);
        assert_eq!(entry.date, now);
        assert_eq!(repo.load_last_entry_date(), Some(now));
    }

    #[test]
    fn test_empty_input_rejected() {
        let (_temp, repo) = initialized_repo();
        let mut service = service(&repo);

        let result = service.submit("", local_noon(2025, 1, 17));
        assert!(matches!(result, Err(ManifestError::EmptyInput)));
        assert_eq!(service.count(), 0);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let (_temp, repo) = initialized_repo();
        let mut service = service(&repo);

        service.submit("  ", local_noon(2025, 1, 17)).unwrap();
        assert_eq!(repo.load().as_slice()[0].text, "  ");
    }

    #[test]
    fn test_fifteenth_entry_reaches_goal_and_sixteenth_is_rejected() {
        let (_temp, repo) = initialized_repo();
        let now = local_noon(2025, 1, 17);
        let mut service = service(&repo);

        for i in 0..14 {
            service.submit(&format!("entry {}", i), now).unwrap();
        }
        assert_eq!(service.count(), 14);
        assert!(!service.is_full());

        let outcome = service.submit("entry 14", now).unwrap();
        assert_eq!(outcome.count, 15);
        assert!(outcome.goal_reached);
        assert!(service.is_full());
        assert_eq!(service.remaining(), 0);

        let result = service.submit("entry 15", now);
        match result {
            Err(ManifestError::QuotaExceeded { limit }) => assert_eq!(limit, 15),
            other => panic!("Expected QuotaExceeded, got {:?}", other),
        }
        assert_eq!(service.count(), 15);
        assert_eq!(repo.load().len(), 15);
    }

    #[test]
    fn test_custom_limit() {
        let (_temp, repo) = initialized_repo();
        let now = local_noon(2025, 1, 17);
        let mut service = EntryService::open(repo.clone(), 2);

        service.submit("a", now).unwrap();
        assert!(service.submit("b", now).unwrap().goal_reached);
        assert!(matches!(
            service.submit("c", now),
            Err(ManifestError::QuotaExceeded { limit: 2 })
        ));
    }

    #[test]
    fn test_reset_without_prior_date_records_now() {
        let (_temp, repo) = initialized_repo();
        let now = local_noon(2025, 1, 17);
        let mut service = service(&repo);

        assert!(!service.check_daily_reset(now).unwrap());
        assert_eq!(service.last_entry_date(), Some(now));
        assert_eq!(repo.load_last_entry_date(), Some(now));
    }

    #[test]
    fn test_reset_clears_entries_from_yesterday() {
        let (_temp, repo) = initialized_repo();
        let yesterday = local_noon(2025, 1, 16);
        let today = local_noon(2025, 1, 17);
        {
            let mut service = service(&repo);
            service.submit("old 1", yesterday).unwrap();
            service.submit("old 2", yesterday).unwrap();
        }

        let mut service = service(&repo);
        assert_eq!(service.count(), 2);
        assert!(service.needs_reset(today));
        assert!(service.check_daily_reset(today).unwrap());

        assert_eq!(service.count(), 0);
        assert!(repo.load().is_empty());
        assert_eq!(repo.load_last_entry_date(), Some(today));
    }

    #[test]
    fn test_reset_same_day_keeps_entries() {
        let (_temp, repo) = initialized_repo();
        let morning = local_noon(2025, 1, 17) - Duration::hours(3);
        let evening = local_noon(2025, 1, 17) + Duration::hours(6);
        {
            let mut service = service(&repo);
            service.submit("morning", morning).unwrap();
        }

        let mut service = service(&repo);
        assert!(!service.needs_reset(evening));
        assert!(!service.check_daily_reset(evening).unwrap());
        assert_eq!(service.count(), 1);
        assert_eq!(repo.load().len(), 1);
    }

    #[test]
    fn test_submit_on_new_day_starts_from_zero() {
        let (_temp, repo) = initialized_repo();
        let yesterday = local_noon(2025, 1, 16);
        let today = local_noon(2025, 1, 17);
        let mut service = service(&repo);

        for i in 0..15 {
            service.submit(&format!("entry {}", i), yesterday).unwrap();
        }
        assert!(service.is_full());

        let outcome = service.submit("fresh start", today).unwrap();
        assert_eq!(outcome.count, 1);
        let stored = repo.load();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored.as_slice()[0].text, "fresh start");
    }

    #[test]
    fn test_rejected_submission_still_runs_reset() {
        let (_temp, repo) = initialized_repo();
        let yesterday = local_noon(2025, 1, 16);
        let today = local_noon(2025, 1, 17);
        let mut service = service(&repo);
        service.submit("old", yesterday).unwrap();

        assert!(matches!(
            service.submit("", today),
            Err(ManifestError::EmptyInput)
        ));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_session_tracks_reset_date() {
        let (_temp, repo) = initialized_repo();
        let yesterday = local_noon(2025, 1, 16);
        let today = local_noon(2025, 1, 17);
        let mut service = service(&repo);
        service.submit("old", yesterday).unwrap();

        service.submit("first today", today).unwrap();
        service.submit("second today", today + Duration::hours(1)).unwrap();
        assert_eq!(service.count(), 2);
    }

    #[test]
    fn test_todays_entries_match_quota_without_last_entry_date() {
        let (temp, repo) = initialized_repo();
        let yesterday = local_noon(2025, 1, 16);
        let today = local_noon(2025, 1, 17);
        {
            let mut service = EntryService::open(repo.clone(), 2);
            service.submit("old 1", yesterday).unwrap();
            service.submit("old 2", yesterday).unwrap();
        }
        std::fs::remove_file(temp.path().join(".manifest/last_entry_date")).unwrap();

        let mut service = EntryService::open(repo.clone(), 2);
        assert_eq!(service.todays_entries(today).len(), service.count());
        assert!(matches!(
            service.submit("new", today),
            Err(ManifestError::QuotaExceeded { limit: 2 })
        ));
    }

    #[test]
    fn test_todays_entries() {
        let (_temp, repo) = initialized_repo();
        let today = local_noon(2025, 1, 17);
        let mut service = service(&repo);
        service.submit("a", today).unwrap();
        service.submit("b", today).unwrap();

        assert_eq!(service.todays_entries(today).len(), 2);
        assert!(service
            .todays_entries(today + Duration::days(1))
            .is_empty());
    }
}
