//! First-class invariants over the move history.
//!
//! Invariants are logical properties that must hold after every
//! transition. [`History::play`](crate::History::play) checks them in
//! debug builds, and tests check them directly.

use crate::{Board, History, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Invariant: the first snapshot is the empty board.
pub struct EmptyStartInvariant;

impl Invariant<History> for EmptyStartInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().first().is_some_and(Board::is_blank)
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// Invariant: each snapshot adds exactly one mark to a previously empty square.
///
/// The mark added at entry `i` belongs to X when `i` is odd, O when even,
/// since entry `i` is the board after move `i`.
pub struct SingleStepInvariant;

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let mover = Player::from_turn(i % 2 == 0);
                let changed: Vec<_> = pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after)
                    .collect();
                matches!(
                    changed.as_slice(),
                    [(Square::Empty, Square::Occupied(p))] if *p == mover
                )
            })
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty square with the mover's mark"
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

impl Invariant<History> for MarkBalanceInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .iter()
            .all(<Self as Invariant<Board>>::holds)
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

/// Invariant: the pointer names a recorded snapshot.
pub struct PointerInRangeInvariant;

impl Invariant<History> for PointerInRangeInvariant {
    fn holds(history: &History) -> bool {
        *history.current_move() < history.len()
    }

    fn description() -> &'static str {
        "Current move points at a recorded snapshot"
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    EmptyStartInvariant,
    SingleStepInvariant,
    MarkBalanceInvariant,
    PointerInRangeInvariant,
);
