//! Uniform random policy.

use super::MovePolicy;
use crate::error::GameError;
use crate::position::Position;
use crate::types::{Board, Mark};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks any empty cell with equal probability. No look-ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    #[instrument(skip(self, board, rng), fields(board = %board))]
    fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        acting: Mark,
        opponent: Mark,
        rng: &mut R,
    ) -> Result<Position, GameError> {
        let position = board
            .empty_cells()
            .choose(rng)
            .copied()
            .ok_or(GameError::NoMovesAvailable)?;
        debug!(%position, "Random policy chose position");
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_only_empty_cell_is_chosen() {
        let board: Board = "XOX/OXO/OX.".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(
                RandomPolicy.select_move(&board, Mark::Second, Mark::First, &mut rng),
                Ok(Position::BottomRight)
            );
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                RandomPolicy.select_move(&board, Mark::First, Mark::Second, &mut a),
                RandomPolicy.select_move(&board, Mark::First, Mark::Second, &mut b)
            );
        }
    }

    #[test]
    fn test_covers_all_cells() {
        let board = Board::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let seen: HashSet<_> = (0..500)
            .map(|_| {
                RandomPolicy
                    .select_move(&board, Mark::First, Mark::Second, &mut rng)
                    .unwrap()
            })
            .collect();
        assert_eq!(seen.len(), 9);
    }
}
