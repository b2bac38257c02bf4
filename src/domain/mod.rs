//! Domain layer - Business logic and domain models

pub mod calendar;
pub mod entry;
pub mod review;
pub mod statistics;

pub use entry::{EntryCollection, JournalEntry};
pub use review::{entries_due_after, entries_due_for_review, REVIEW_AFTER_DAYS};
pub use statistics::{best_streak, current_streak, success_rate, Progress};
