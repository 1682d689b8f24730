//! Noughts - play noughts and crosses in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::AppConfig;
use noughts::cli::{Cli, Command};
use noughts_engine::{Difficulty, Mark, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play {
            human,
            difficulty,
            seed,
        } => run_play(&config, human, difficulty, seed),
        Command::Duel {
            first,
            second,
            games,
            seed,
            json,
        } => run_duel(first, second, games, seed.or(*config.session().seed()), json),
    }
}

/// Logs go to stderr so stdout carries only the board.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(
    config: &AppConfig,
    human: Option<Mark>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
) -> Result<()> {
    let session_config = config.session_with_overrides(human, difficulty, seed);
    info!(?session_config, "Starting interactive game");

    let mut session = Session::new(session_config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    noughts::play::run(&mut session, stdin.lock(), &mut stdout)
}

/// Run computer-vs-computer games and print the tally
#[instrument]
fn run_duel(
    first: Difficulty,
    second: Difficulty,
    games: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let summary = noughts::run_duel(first, second, games, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
