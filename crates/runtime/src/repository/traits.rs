//! Source contract for recorded actions.

use crate::api::Result;

use super::ActionRecord;

/// Ordered, forward-only stream of recorded actions.
///
/// Sources are not seekable: each record is yielded exactly once, in the
/// order it was recorded.
pub trait ActionSource {
    fn has_another_action(&self) -> bool;

    /// Yields the next record. Fails with
    /// [`RuntimeError::SourceExhausted`](crate::RuntimeError::SourceExhausted)
    /// once every record has been consumed.
    fn next_action(&mut self) -> Result<ActionRecord>;
}
