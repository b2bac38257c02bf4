//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_config, format_progress, format_review_list, format_submit_outcome, format_today,
    format_toggle, reminder_text,
};
