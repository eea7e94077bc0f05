//! CLI frontend for the Pfadweber choose-your-own-adventure engine.

mod commands;
mod display;
mod prompt;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pw",
    about = "Pfadweber — play choose-your-own-adventure stories",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story file, or resume from a bookmark
    Play {
        /// Story or bookmark file
        file: PathBuf,

        /// RNG seed for weighted transitions
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Display width in columns
        #[arg(short, long, default_value = "80")]
        width: usize,
    },

    /// Parse a story or bookmark file and report its shape
    Check {
        /// Story or bookmark file
        file: PathBuf,
    },

    /// Create a starter story file
    Init {
        /// Story name; writes <name>.story in the current directory
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { file, seed, width } => commands::play::run(&file, seed, width),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Init { name } => commands::init::run(&name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
