//! Ordered board snapshots plus the current move pointer.

use crate::error::HistoryError;
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::{Board, BoardView, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Every snapshot played this session and which one is current.
///
/// Entry 0 is always the empty board; entry `i` is the board after move
/// `i`. Whose turn it is comes from the parity of the pointer and is never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(try_from = "RawHistory")]
pub struct History {
    /// Recorded snapshots, oldest first.
    #[getter(skip)]
    snapshots: Vec<Board>,
    /// Index of the current snapshot.
    current_move: usize,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Board>,
    current_move: usize,
}

impl TryFrom<RawHistory> for History {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            current_move: raw.current_move,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            HistoryError::Inconsistent {
                reason: violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            }
        })?;
        Ok(history)
    }
}

/// One row of the move list: a control that jumps to `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index the control jumps to.
    pub index: usize,
    /// Whether this is the snapshot currently shown.
    pub is_current: bool,
}

impl MoveEntry {
    /// Label shown on the jump control.
    pub fn description(&self) -> String {
        if self.index > 0 {
            format!("Go to move #{}", self.index)
        } else {
            "Go to game start".to_string()
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Builds a history without checking it, for invariant tests.
    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, current_move: usize) -> Self {
        Self {
            snapshots,
            current_move,
        }
    }

    /// Recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of recorded snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Player who places the next mark.
    pub fn next_player(&self) -> Player {
        Player::from_turn(self.x_is_next())
    }

    /// The snapshot at the pointer.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current_move]
    }

    /// View of the current snapshot for rendering and click handling.
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(self.current_board(), self.x_is_next())
    }

    /// Whether the pointer sits before the newest snapshot.
    pub fn is_rewound(&self) -> bool {
        self.current_move + 1 < self.snapshots.len()
    }

    /// Records `next` as the move after the current snapshot.
    ///
    /// Snapshots after the pointer are discarded first, so playing from a
    /// rewound position overwrites that branch. The snapshot is trusted to
    /// be a single legal step; [`BoardView`] enforces that.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `next` leaves the history inconsistent
    /// (for example two new marks, or the wrong player's mark).
    #[instrument(
        skip(self, next),
        fields(current_move = self.current_move, len = self.snapshots.len())
    )]
    pub fn play(&mut self, next: Board) {
        let discarded = self.snapshots.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(self.current_move + 1);
        self.snapshots.push(next);
        self.current_move = self.snapshots.len() - 1;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated after play: {:?}",
            HistoryInvariants::check_all(self)
        );
    }

    /// Moves the pointer to `index` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] when `index` is past the
    /// last snapshot. The pointer is left where it was.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            warn!(len = self.snapshots.len(), "Jump target out of range");
            return Err(HistoryError::MoveOutOfRange {
                requested: index,
                len: self.snapshots.len(),
            });
        }
        self.current_move = index;
        Ok(())
    }

    /// Jump controls, one per snapshot, in history order.
    pub fn entries(&self) -> impl Iterator<Item = MoveEntry> + '_ {
        (0..self.snapshots.len()).map(move |index| MoveEntry {
            index,
            is_current: index == self.current_move,
        })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
