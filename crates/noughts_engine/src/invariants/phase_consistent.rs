//! Phase consistency invariant.

use super::Invariant;
use crate::Session;
use crate::phases::Phase;
use crate::rules::evaluate;

/// Invariant: the phase agrees with the board.
///
/// A session waiting to start has an empty board, and a started session is
/// `Terminal` exactly when the board has a result.
pub struct PhaseConsistentInvariant;

impl<R> Invariant<Session<R>> for PhaseConsistentInvariant {
    fn holds(session: &Session<R>) -> bool {
        let terminal = evaluate(session.board()).is_terminal();
        match session.phase() {
            Phase::AwaitingStart => session.board().move_count() == 0,
            Phase::InProgress => !terminal,
            Phase::Terminal => terminal,
        }
    }

    fn description() -> &'static str {
        "Session is terminal exactly when the board has a result"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, SessionConfig};

    #[test]
    fn test_won_board_in_progress_violates() {
        let mut session = Session::new(SessionConfig::default());
        session.phase = Phase::InProgress;
        session.board = "XXX/OO./...".parse::<Board>().unwrap();
        assert!(!PhaseConsistentInvariant::holds(&session));
        session.phase = Phase::Terminal;
        assert!(PhaseConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_marks_before_start_violate() {
        let mut session = Session::new(SessionConfig::default());
        assert!(PhaseConsistentInvariant::holds(&session));
        session.board = "X../.../...".parse::<Board>().unwrap();
        assert!(!PhaseConsistentInvariant::holds(&session));
    }
}
