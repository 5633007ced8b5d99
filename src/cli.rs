use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipshelf")]
#[command(about = "A TUI for browsing a personal channel/video/chapter video catalog")]
pub struct Cli {
    /// Path to the library JSON file
    #[arg(short, long, default_value = "library.json")]
    pub library: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive TUI (default)
    Run,
    /// Check the library file for integrity problems and print a summary
    Validate,
}
