//! Move-selection policies for the computer opponent.
//!
//! Every policy answers the same question: given a board, the mark to move
//! and its opponent, which empty cell should be played? Randomness is passed
//! in by the caller so a seeded generator makes every policy reproducible.

mod heuristic;
mod random;
mod search;

pub use heuristic::HeuristicPolicy;
pub use random::RandomPolicy;
pub use search::SearchPolicy;

use crate::error::GameError;
use crate::position::Position;
use crate::types::{Board, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A strategy for choosing the computer's move.
pub trait MovePolicy {
    /// Picks an empty cell for `acting` to play.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoMovesAvailable`] when the board has no empty cell.
    fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        acting: Mark,
        opponent: Mark,
        rng: &mut R,
    ) -> Result<Position, GameError>;
}

/// Which policy the computer opponent uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    #[serde(alias = "easy")]
    #[strum(to_string = "random", serialize = "easy")]
    Random,
    /// Win if possible, else block, else random.
    #[serde(alias = "normal")]
    #[strum(to_string = "heuristic", serialize = "normal")]
    Heuristic,
    /// Exhaustive minimax; never loses.
    #[serde(alias = "minimax")]
    #[strum(to_string = "search", serialize = "minimax")]
    Search,
}

impl Difficulty {
    /// Runs the policy this difficulty selects.
    pub fn select_move<R: Rng + ?Sized>(
        self,
        board: &Board,
        acting: Mark,
        opponent: Mark,
        rng: &mut R,
    ) -> Result<Position, GameError> {
        match self {
            Difficulty::Random => RandomPolicy.select_move(board, acting, opponent, rng),
            Difficulty::Heuristic => HeuristicPolicy.select_move(board, acting, opponent, rng),
            Difficulty::Search => SearchPolicy.select_move(board, acting, opponent, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_difficulty_parses_alias_labels() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Random);
        assert_eq!("Normal".parse::<Difficulty>().unwrap(), Difficulty::Heuristic);
        assert_eq!("minimax".parse::<Difficulty>().unwrap(), Difficulty::Search);
        assert_eq!("SEARCH".parse::<Difficulty>().unwrap(), Difficulty::Search);
        assert!("impossible".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Search.to_string(), "search");
    }

    #[test]
    fn test_every_policy_rejects_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for difficulty in Difficulty::iter() {
            assert_eq!(
                difficulty.select_move(&board, Mark::First, Mark::Second, &mut rng),
                Err(GameError::NoMovesAvailable),
                "{difficulty} should refuse a full board"
            );
        }
    }

    #[test]
    fn test_every_policy_returns_empty_cell() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for difficulty in Difficulty::iter() {
            let pos = difficulty
                .select_move(&board, Mark::First, Mark::Second, &mut rng)
                .unwrap();
            assert!(board.is_empty(pos), "{difficulty} picked occupied {pos}");
        }
    }
}
