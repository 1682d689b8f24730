//! First-class invariants for sessions.
//!
//! Invariants are logical properties that must hold after every mutation of a
//! [`Session`](crate::Session). They are asserted in debug builds and can be
//! checked on demand with [`Session::check_invariants`](crate::Session::check_invariants).

pub mod history_consistent;
pub mod mark_balance;
pub mod phase_consistent;
pub mod single_winner;

pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use phase_consistent::PhaseConsistentInvariant;
pub use single_winner::SingleWinnerInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for the four-invariant tuple [`SessionInvariants`].
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
            (I4::holds(state), I4::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every session invariant as a composable set.
pub type SessionInvariants = (
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    HistoryConsistentInvariant,
    PhaseConsistentInvariant,
);
