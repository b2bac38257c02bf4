//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod store;

pub use config::{Config, DEFAULT_DAILY_LIMIT};
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::EntryStore;
