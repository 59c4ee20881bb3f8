//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitfolio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to gitfolio.toml (defaults to the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show GitHub profile and repository stats
    Stats {
        /// GitHub username (overrides gitfolio.toml)
        #[arg(short, long)]
        username: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the downloadable portfolio site bundle
    Generate {
        /// GitHub username embedded in the bundle (overrides gitfolio.toml)
        #[arg(short, long)]
        username: Option<String>,

        /// LinkedIn profile URL
        #[arg(long)]
        linkedin: Option<String>,

        /// Twitter profile URL
        #[arg(long)]
        twitter: Option<String>,

        /// Instagram profile URL
        #[arg(long)]
        instagram: Option<String>,

        /// Output path (defaults to the suggested file name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a token's shape without contacting GitHub
    Token {
        /// The token to check
        token: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
