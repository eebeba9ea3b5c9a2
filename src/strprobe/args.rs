use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "strprobe")]
#[command(
    about = "Analyze strings and query them by structural properties",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a value and store the result
    #[command(alias = "a")]
    Add {
        /// The string to analyze
        value: String,
    },

    /// Analyze a value without storing it
    #[command(alias = "i")]
    Inspect {
        /// The string to analyze
        value: String,
    },

    /// Fetch a stored entry by id (content hash)
    Get {
        /// Entry id
        id: String,
    },

    /// Delete a stored entry
    #[command(alias = "rm")]
    Delete {
        /// Entry id
        id: String,
    },

    /// List entries, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Free-text query, e.g. "single word palindromes longer than 3"
        #[arg(short, long)]
        query: Option<String>,

        /// Keep only (non-)palindromes: true or false
        #[arg(long)]
        palindrome: Option<String>,

        /// Minimum length, inclusive
        #[arg(long)]
        min_length: Option<String>,

        /// Maximum length, inclusive
        #[arg(long)]
        max_length: Option<String>,

        /// Exact word count
        #[arg(long)]
        word_count: Option<String>,

        /// Required character (folded to lowercase)
        #[arg(long)]
        contains: Option<String>,
    },
}
