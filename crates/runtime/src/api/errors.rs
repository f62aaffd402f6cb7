//! Unified error type surfaced by replay.
//!
//! Wraps controller failures, malformed records, and source I/O so clients
//! can bubble them up with consistent context.
use std::num::ParseIntError;

use game_core::{ControllerError, ParsePositionError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unhandled action type: {0}")]
    UnknownActionType(String),

    #[error("invalid target '{target}'")]
    InvalidTarget {
        target: String,
        #[source]
        source: ParsePositionError,
    },

    #[error("invalid amount '{value}'")]
    InvalidAmount {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("action source is exhausted")]
    SourceExhausted,

    #[error("failed to read action log: {0}")]
    Source(#[from] csv::Error),

    #[error(transparent)]
    Controller(#[from] ControllerError),
}
