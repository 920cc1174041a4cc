use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// UFO Burgers - A cosmic experience landing in your terminal
#[derive(Parser)]
#[command(name = "ufoburgers")]
#[command(about = "A cinematic terminal landing experience for UFO Burgers")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip the intro sound
    #[arg(long, global = true)]
    pub mute: bool,

    /// Write logs to this file (logs are discarded otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive experience (default)
    Run,
    /// Print the burger menu
    Menu {
        /// Print as JSON
        #[arg(long)]
        json: bool,
        /// Show a single burger by planet id (e.g. jupiter, erde)
        #[arg(short, long)]
        planet: Option<String>,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Destination path
        output: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
