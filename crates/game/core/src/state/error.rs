//! Board state errors.
//!
//! Errors related to cell occupancy and board/entity bookkeeping.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Occupant, Position};

/// Errors that occur while placing or removing board occupants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Cell already holds another occupant.
    #[error("Position {position} is already occupied by {occupant}")]
    OccupiedCell {
        /// The position that is occupied.
        position: Position,
        /// The occupant currently in the cell.
        occupant: Occupant,
    },

    /// Board cell does not hold the occupant the caller believes is there.
    #[error("Board desync at {position}: expected {expected}, found {found:?}")]
    Desync {
        /// Position the entity claims to occupy.
        position: Position,
        /// Occupant the caller tried to remove.
        expected: Occupant,
        /// What the board actually holds.
        found: Option<Occupant>,
    },

    /// Position is outside the board.
    #[error("Position {position} is out of bounds (board size: {width}x{height})")]
    OutOfBounds {
        /// The invalid position.
        position: Position,
        /// Board width.
        width: u32,
        /// Board height.
        height: u32,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            OccupiedCell { .. } | OutOfBounds { .. } => ErrorSeverity::Validation,

            // Board and rosters disagree; the session cannot be trusted anymore
            Desync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            OccupiedCell { .. } => "STATE_OCCUPIED_CELL",
            Desync { .. } => "STATE_DESYNC",
            OutOfBounds { .. } => "STATE_OUT_OF_BOUNDS",
        }
    }
}
