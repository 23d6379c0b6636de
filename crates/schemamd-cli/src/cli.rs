//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::Parser;
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// schemamd - Markdown documentation for JSON Schema documents
///
/// Loads a schema from a path or URL, resolves every `$ref` and prints the
/// rendered documentation to stdout.
#[derive(Parser, Debug)]
#[command(name = "schemamd", version, author, about, long_about = None)]
pub struct Cli {
    /// Path or URL of the root schema document
    #[arg(short, long, value_name = "PATH|URL")]
    pub schema: Option<String>,

    /// Template file wrapping the rendered Markdown
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Timeout in seconds for each remote document fetch (0 disables it)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, env = "SCHEMAMD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}
