//! History consistency invariant: the move log explains the board.

use super::Invariant;
use crate::Session;
use crate::types::{Cell, Mark};

/// Invariant: the history replays onto the current board.
///
/// Moves alternate starting with `First`, each recorded position holds the
/// recorded mark, and no cell is occupied that the history does not mention.
pub struct HistoryConsistentInvariant;

impl<R> Invariant<Session<R>> for HistoryConsistentInvariant {
    fn holds(session: &Session<R>) -> bool {
        let history = session.history();
        let board = session.board();

        if history.len() != board.move_count() {
            return false;
        }

        let mut expected = Mark::First;
        for mv in history {
            if mv.mark != expected || board.get(mv.position) != Cell::Occupied(mv.mark) {
                return false;
            }
            expected = expected.opponent();
        }

        true
    }

    fn description() -> &'static str {
        "Move history alternates from First and matches the board"
    }
}
