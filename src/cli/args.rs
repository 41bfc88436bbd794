//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cookshelf - a small, self-hostable collections API server
#[derive(Parser, Debug)]
#[command(name = "cookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./cookshelf.json")]
        config: PathBuf,
    },

    /// Start the cookshelf server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./cookshelf.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
