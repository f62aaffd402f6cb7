//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`StateError`, `MoveError`, `RuleError`,
//! `ControllerError`) are defined next to the code that raises them. This
//! module holds what they share.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same action may succeed later (more AP, next day)
/// - **Validation**: the action itself is invalid and never succeeds as written
/// - **Internal**: board and rosters disagree, which indicates a bug
/// - **Fatal**: the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or with another action.
    ///
    /// Examples: destination occupied, not enough AP
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: target out of range, trade amount not in the rate table
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: board cell does not hold the entity being removed
    Internal,

    /// Fatal error - the replay cannot continue.
    ///
    /// Examples: unknown actor in the action log
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
