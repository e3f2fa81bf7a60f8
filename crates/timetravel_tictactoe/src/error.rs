//! Contract errors raised by the game state model.

/// A caller passed an index the model cannot honour.
///
/// These indicate a bug in the driving layer, not a reachable user
/// action, so they are reported instead of clamped.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Cell index {cell} is outside the board (0-8)")]
    CellOutOfRange {
        /// The rejected index.
        cell: usize,
    },

    /// Move number outside the recorded history.
    #[display("Move #{requested} is outside the recorded history ({len} snapshots)")]
    MoveOutOfRange {
        /// The rejected move number.
        requested: usize,
        /// History length at the time of the call.
        len: usize,
    },

    /// A transition broke a model invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
