//! Session lifecycle phases.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// ```text
/// AwaitingStart --start()--> InProgress --win/draw--> Terminal
///       ^                        ^                        |
///       |                        +--------reset()---------+
///       +-----------------restart() from any phase--------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Side and difficulty may still be changed; no moves accepted.
    #[default]
    AwaitingStart,
    /// Moves are being played.
    InProgress,
    /// The board has a result; moves are rejected until a reset.
    Terminal,
}

impl Phase {
    /// True while side and difficulty can be changed.
    pub fn is_configurable(self) -> bool {
        matches!(self, Phase::AwaitingStart)
    }
}
