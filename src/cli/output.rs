//! Output formatting utilities

use crate::application::SubmitOutcome;
use crate::domain::{JournalEntry, Progress};
use crate::infrastructure::Config;

const REVIEW_EMPTY: &str = "Entries will appear here one week from submission.";

/// Format the confirmation printed after a submission
pub fn format_submit_outcome(outcome: &SubmitOutcome) -> String {
    let mut output = format!(
        "{}/{} entries submitted today\n",
        outcome.count, outcome.limit
    );
    if outcome.goal_reached {
        output.push_str(&format!(
            "Congratulations! You have completed your {} entries for today!\n",
            outcome.limit
        ));
    }
    output
}

/// Format today's entries with the daily counter
pub fn format_today(entries: &[&JournalEntry], limit: usize, reminder: Option<&str>) -> String {
    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}\n",
            entry.date.with_timezone(&chrono::Local).format("%H:%M"),
            entry.text
        ));
    }
    output.push_str(&format!(
        "{}/{} entries submitted today\n",
        entries.len(),
        limit
    ));
    if let Some(text) = reminder {
        output.push_str(text);
        output.push('\n');
    }
    output
}

/// Reminder text shown when the reminder is enabled and nothing was written today
pub fn reminder_text(limit: usize) -> String {
    format!(
        "Don't Forget! Write your {} manifestation entries for today!",
        limit
    )
}

/// Format entries due for review, one per line with a completion marker
pub fn format_review_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return REVIEW_EMPTY.to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "[{}] {}  {}  {}\n",
            if entry.completed { "x" } else { " " },
            entry.short_id(),
            entry.day().format("%d-%m-%Y"),
            entry.text
        ));
    }
    output
}

/// Format the result of a completion toggle
pub fn format_toggle(entry: &JournalEntry) -> String {
    if entry.completed {
        format!("Marked as came true: {}", entry.text)
    } else {
        format!("Marked as not yet: {}", entry.text)
    }
}

/// Format progress statistics
pub fn format_progress(progress: &Progress) -> String {
    let mut output = match progress.success_rate {
        Some(rate) => format!(
            "Success Rate: {}% ({} of {})\n",
            rate, progress.completed, progress.total
        ),
        None => "No entries to calculate success rate.\n".to_string(),
    };
    output.push_str(&format!(
        "Current Streak: {} Days\n",
        progress.current_streak
    ));
    output.push_str(&format!("Best Streak: {} Days\n", progress.best_streak));
    output
}

/// Format the full configuration
pub fn format_config(config: &Config) -> String {
    format!(
        "daily_limit = {}\nreview_after_days = {}\nreminder_enabled = {}\nreminder_hour = {}\ncreated = {}\n",
        config.daily_limit,
        config.review_after_days,
        config.reminder_enabled,
        config.reminder_hour,
        config.created.to_rfc3339()
    )
}
