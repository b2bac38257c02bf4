//! manifest - Terminal manifestation journal
//!
//! Write up to a daily limit of short statements about things you wish to
//! experience, review them a week later to mark which came true, and follow
//! your success rate and writing streaks.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::ManifestError;
