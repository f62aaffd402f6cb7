//! Action record format.

use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};

/// Kind of player action, as spelled in the `action_type` column.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ActionType {
    Move,
    Fire,
    Upgrade,
    Trade,
    ShareAp,
    ShareLife,
    TransferGold,
}

/// One row of an action log.
///
/// `target` is algebraic board notation (`b3`) for `move` and `fire`, and an
/// actor id for `share_ap`, `share_life`, and `transfer_gold`. `metadata`
/// carries the hit flag or the amount.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub date: String,
    pub actor: String,
    pub action_type: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub metadata: String,
}

impl ActionRecord {
    pub fn new(
        date: impl Into<String>,
        actor: impl Into<String>,
        action_type: ActionType,
        target: impl Into<String>,
        metadata: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            actor: actor.into(),
            action_type: action_type.to_string(),
            target: target.into(),
            metadata: metadata.into(),
        }
    }

    /// Parses the `action_type` column. Unknown names are fatal.
    pub fn kind(&self) -> Result<ActionType> {
        self.action_type
            .parse()
            .map_err(|_| RuntimeError::UnknownActionType(self.action_type.clone()))
    }
}
