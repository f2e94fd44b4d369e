//! Error types for history navigation.

use derive_more::{Display, Error};

/// Errors raised by [`History`](crate::History).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Jump target lies past the last recorded move.
    #[display("Move #{} is out of range (history holds {} entries)", requested, len)]
    MoveOutOfRange {
        /// Index that was asked for.
        requested: usize,
        /// Number of entries in the history.
        len: usize,
    },
    /// Stored snapshots break one or more history invariants.
    #[display("Inconsistent history: {}", reason)]
    Inconsistent {
        /// Descriptions of the violated invariants.
        #[error(not(source))]
        reason: String,
    },
}
