//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "manifest")]
#[command(about = "Manifestation journal: write it down, review it in a week", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write an entry, in past tense, as if it already happened
    Add {
        /// Entry text (e.g. "Got a free coffee")
        text: String,
    },

    /// Show today's entries and how many are left
    Today,

    /// List entries written at least a week ago
    Review,

    /// Mark a reviewed entry as came true (or undo it)
    Toggle {
        /// Entry id or unique id prefix, as shown by `review`
        id: String,
    },

    /// Show success rate and streaks
    Progress,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
