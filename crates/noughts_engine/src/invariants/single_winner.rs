//! Single winner invariant.

use super::Invariant;
use crate::Session;
use crate::rules::has_line;
use crate::types::Mark;

/// Invariant: at most one mark holds a line.
pub struct SingleWinnerInvariant;

impl<R> Invariant<Session<R>> for SingleWinnerInvariant {
    fn holds(session: &Session<R>) -> bool {
        !(has_line(session.board(), Mark::First) && has_line(session.board(), Mark::Second))
    }

    fn description() -> &'static str {
        "At most one mark has three in a row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, SessionConfig};

    #[test]
    fn test_double_line_violates() {
        let mut session = Session::new(SessionConfig::default());
        session.board = "XXX/OOO/...".parse::<Board>().unwrap();
        assert!(!SingleWinnerInvariant::holds(&session));
        session.board = "XXX/OO./...".parse::<Board>().unwrap();
        assert!(SingleWinnerInvariant::holds(&session));
    }
}
