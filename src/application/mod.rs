//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod progress;
pub mod review_entries;
pub mod submit_entry;

pub use manage_config::ConfigService;
pub use progress::load_progress;
pub use review_entries::{toggle_completion, ReviewService};
pub use submit_entry::{EntryService, SubmitOutcome};
