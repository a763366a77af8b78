//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse characters from a paginated REST API
#[derive(Parser, Debug)]
#[command(name = "character-browser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Listing endpoint, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every character and print the listing
    List {
        /// Only show characters whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Remove these ids from the listing before printing
        #[arg(short, long, value_delimiter = ',')]
        delete: Vec<u32>,
    },

    /// Fetch and print one character
    Show {
        /// Character id
        id: String,
    },

    /// Interactive session: search, delete, open and go back
    Browse {
        /// Delay before a selected card opens, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
