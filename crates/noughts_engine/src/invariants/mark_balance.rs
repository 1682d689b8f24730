//! Mark balance invariant: `First` is never behind and never two ahead.

use super::Invariant;
use crate::Session;
use crate::types::Mark;

/// Invariant: `count(First) - count(Second)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl<R> Invariant<Session<R>> for MarkBalanceInvariant {
    fn holds(session: &Session<R>) -> bool {
        let first = session.board().count(Mark::First);
        let second = session.board().count(Mark::Second);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "First has the same number of marks as Second, or one more"
    }
}
