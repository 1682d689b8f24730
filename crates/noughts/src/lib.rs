//! Noughts - terminal front end for [`noughts_engine`]
//!
//! Hosts the pieces of the `noughts` binary that are worth testing on their
//! own: argument parsing, config loading, the interactive loop and the duel
//! runner.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod duel;
pub mod play;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use duel::{DuelSummary, GameRecord, play_game, run_duel};
