//! CLI argument definitions using clap
//!
//! Commands:
//! - homequest start --config <path>
//! - homequest check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HomeQuest - A conversational real-estate search backend
#[derive(Parser, Debug)]
#[command(name = "homequest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HomeQuest API server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./homequest.json")]
        config: PathBuf,
    },

    /// Validate configuration and seed data, then exit
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./homequest.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
