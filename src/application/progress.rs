//! Progress statistics use case

use crate::domain::Progress;
use crate::infrastructure::EntryStore;

/// Compute progress statistics over the stored entries
pub fn load_progress<S: EntryStore>(store: &S) -> Progress {
    Progress::from_entries(&store.load())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::local_noon;
    use crate::domain::{EntryCollection, JournalEntry};
    use crate::infrastructure::{FileSystemRepository, JournalRepository};
    use tempfile::TempDir;

    #[test]
    fn test_progress_of_empty_store() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let progress = load_progress(&repo);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.success_rate, None);
        assert_eq!(progress.current_streak, 0);
        assert_eq!(progress.best_streak, 0);
    }

    #[test]
    fn test_progress_of_stored_entries() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let mut done = JournalEntry::new("done", local_noon(2025, 1, 1));
        done.completed = true;
        let entries: EntryCollection = vec![
            done,
            JournalEntry::new("b", local_noon(2025, 1, 2)),
            JournalEntry::new("c", local_noon(2025, 1, 3)),
            JournalEntry::new("d", local_noon(2025, 1, 3)),
        ]
        .into();
        repo.save_entries(&entries).unwrap();

        let progress = load_progress(&repo);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.success_rate, Some(25));
        assert_eq!(progress.current_streak, 3);
        assert_eq!(progress.best_streak, 3);
    }
}
