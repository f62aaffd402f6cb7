//! Rule violation errors.
//!
//! Every policy reports the first constraint an action violates. Whether the
//! violation aborts a replay is decided by the controller, not here.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, StateError};

/// Reasons a move is rejected by the move rule.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("must only move 1 space at a time ({from} -> {destination} is {distance})")]
    TooFar {
        from: Position,
        destination: Position,
        distance: u32,
    },

    #[error("destination {destination} is occupied")]
    Occupied { destination: Position },

    #[error("not enough AP to move (required: {required}, available: {available})")]
    InsufficientAp { required: u32, available: u32 },

    #[error("destroyed tanks cannot move")]
    ActorDestroyed,

    #[error(transparent)]
    State(#[from] StateError),
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::State(inner) => inner.severity(),
            MoveError::Occupied { .. } | MoveError::InsufficientAp { .. } => {
                ErrorSeverity::Recoverable
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            MoveError::TooFar { .. } => "MOVE_TOO_FAR",
            MoveError::Occupied { .. } => "MOVE_OCCUPIED",
            MoveError::InsufficientAp { .. } => "MOVE_INSUFFICIENT_AP",
            MoveError::ActorDestroyed => "MOVE_ACTOR_DESTROYED",
            MoveError::State(inner) => inner.error_code(),
        }
    }
}

/// Violations of range, resource, and sharing rules.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("target is out of range (distance: {distance}, range: {range})")]
    OutOfRange { distance: u32, range: u32 },

    #[error("not enough AP (required: {required}, available: {available})")]
    InsufficientAp { required: u32, available: u32 },

    #[error("not enough gold (required: {required}, available: {available})")]
    InsufficientGold { required: u32, available: u32 },

    #[error("must trade gold in multiples of {divisor} (got {amount})")]
    NotMultiple { amount: u32, divisor: u32 },

    #[error("no trade rate for {amount} gold")]
    NotInTable { amount: u32 },

    #[error("invalid amount {amount}")]
    InvalidAmount { amount: u32 },

    #[error("{0} is disabled by the current rules")]
    Disabled(&'static str),

    #[error("already {0} today")]
    AlreadyActedToday(&'static str),

    #[error("no lives left to give")]
    NoLivesToGive,

    #[error("target already has the maximum number of lives")]
    TargetAtMaxLives,

    #[error("a tank cannot target itself")]
    SelfTarget,

    #[error("destroyed tanks cannot act")]
    ActorDestroyed,

    #[error("target tank is destroyed")]
    TargetDestroyed,

    #[error("no target at {position}")]
    NoTarget { position: Position },

    #[error(transparent)]
    State(#[from] StateError),
}

impl GameError for RuleError {
    fn severity(&self) -> ErrorSeverity {
        use RuleError::*;
        match self {
            State(inner) => inner.severity(),
            InsufficientAp { .. } | InsufficientGold { .. } | AlreadyActedToday(_) => {
                ErrorSeverity::Recoverable
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use RuleError::*;
        match self {
            OutOfRange { .. } => "RULE_OUT_OF_RANGE",
            InsufficientAp { .. } => "RULE_INSUFFICIENT_AP",
            InsufficientGold { .. } => "RULE_INSUFFICIENT_GOLD",
            NotMultiple { .. } => "RULE_NOT_MULTIPLE",
            NotInTable { .. } => "RULE_NOT_IN_TABLE",
            InvalidAmount { .. } => "RULE_INVALID_AMOUNT",
            Disabled(_) => "RULE_DISABLED",
            AlreadyActedToday(_) => "RULE_ALREADY_ACTED_TODAY",
            NoLivesToGive => "RULE_NO_LIVES_TO_GIVE",
            TargetAtMaxLives => "RULE_TARGET_AT_MAX_LIVES",
            SelfTarget => "RULE_SELF_TARGET",
            ActorDestroyed => "RULE_ACTOR_DESTROYED",
            TargetDestroyed => "RULE_TARGET_DESTROYED",
            NoTarget { .. } => "RULE_NO_TARGET",
            State(inner) => inner.error_code(),
        }
    }
}
