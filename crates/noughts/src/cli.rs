//! Command-line interface for noughts.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};
use noughts_engine::{Difficulty, Mark};
use std::path::PathBuf;

/// Noughts - play noughts and crosses against the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses against random, heuristic or minimax opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on stdin/stdout
    Play {
        /// Mark you play: first (X) or second (O)
        #[arg(long)]
        human: Option<Mark>,

        /// Computer opponent: random, heuristic or search
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two computer policies against each other
    Duel {
        /// Policy playing X
        #[arg(long, default_value = "search")]
        first: Difficulty,

        /// Policy playing O
        #[arg(long, default_value = "search")]
        second: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Seed for the shared random source
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
