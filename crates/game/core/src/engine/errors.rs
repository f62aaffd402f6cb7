//! Error types surfaced by the game controller.

use crate::error::{ErrorSeverity, GameError};
use crate::rules::RuleError;
use crate::state::{Position, StateError};

/// Errors surfaced while setting up or driving a [`super::GameController`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ControllerError {
    /// No tank has this owner name or tile label.
    #[error("no tank owned by or labelled '{0}'")]
    NotFound(String),

    #[error("owner '{0}' already has a tank")]
    DuplicateOwner(String),

    #[error("no line of sight from {from} to {to}")]
    NoLineOfSight { from: Position, to: Position },

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl GameError for ControllerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ControllerError::NotFound(_) => ErrorSeverity::Fatal,
            ControllerError::DuplicateOwner(_) | ControllerError::NoLineOfSight { .. } => {
                ErrorSeverity::Validation
            }
            ControllerError::Rule(err) => err.severity(),
            ControllerError::State(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ControllerError::NotFound(_) => "CONTROLLER_NOT_FOUND",
            ControllerError::DuplicateOwner(_) => "CONTROLLER_DUPLICATE_OWNER",
            ControllerError::NoLineOfSight { .. } => "CONTROLLER_NO_LINE_OF_SIGHT",
            ControllerError::Rule(err) => err.error_code(),
            ControllerError::State(err) => err.error_code(),
        }
    }
}
