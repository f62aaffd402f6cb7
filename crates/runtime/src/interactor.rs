//! Replays recorded actions against a controller.
//!
//! The [`Interactor`] tracks the date of the last applied action. A record
//! with a different date (including the very first one) opens a new day via
//! [`GameController::start_of_turn`] before the record is applied.

use game_core::{GameController, Position};
use tracing::{debug, info, info_span};

use crate::api::{Result, RuntimeError};
use crate::repository::{ActionRecord, ActionSource, ActionType};

/// Counters reported after a replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReplaySummary {
    pub actions: usize,
    pub days: usize,
}

/// Drives a borrowed [`GameController`] from an [`ActionSource`].
pub struct Interactor<'a> {
    controller: &'a mut GameController,
    date: Option<String>,
}

impl<'a> Interactor<'a> {
    pub fn new(controller: &'a mut GameController) -> Self {
        Self {
            controller,
            date: None,
        }
    }

    /// Date of the last applied record, if any.
    pub fn current_date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Applies every remaining record from `source`.
    ///
    /// Stops at the first fatal error; actions applied before it stay applied.
    pub fn take_actions<S>(&mut self, source: &mut S) -> Result<ReplaySummary>
    where
        S: ActionSource + ?Sized,
    {
        let span = info_span!("replay");
        let _enter = span.enter();

        let mut summary = ReplaySummary::default();
        while source.has_another_action() {
            let action = source.next_action()?;
            if self.check_date(&action) {
                summary.days += 1;
            }
            self.take_action(&action)?;
            summary.actions += 1;
        }

        info!(actions = summary.actions, days = summary.days, "replay finished");
        Ok(summary)
    }

    /// Opens a new day when the record's date differs from the last one.
    fn check_date(&mut self, action: &ActionRecord) -> bool {
        if self.date.as_deref() == Some(action.date.as_str()) {
            return false;
        }

        info!(date = %action.date, "start of day");
        self.controller.start_of_turn();
        self.date = Some(action.date.clone());
        true
    }

    fn take_action(&mut self, action: &ActionRecord) -> Result<()> {
        let kind = action.kind()?;
        debug!(
            actor = %action.actor,
            %kind,
            target = %action.target,
            metadata = %action.metadata,
            "applying action"
        );

        let actor = action.actor.as_str();
        match kind {
            ActionType::Move => {
                self.controller
                    .perform_move(actor, parse_target(&action.target)?)?;
            }
            ActionType::Fire => {
                self.controller.perform_fire(
                    actor,
                    parse_target(&action.target)?,
                    is_hit(&action.metadata),
                )?;
            }
            ActionType::Upgrade => self.controller.perform_upgrade(actor)?,
            ActionType::Trade => {
                self.controller
                    .perform_trade_gold(actor, parse_amount(&action.metadata)?)?;
            }
            ActionType::ShareAp => {
                self.controller.perform_share_actions(
                    actor,
                    &action.target,
                    parse_amount(&action.metadata)?,
                )?;
            }
            ActionType::ShareLife => {
                self.controller.perform_share_life(actor, &action.target)?;
            }
            ActionType::TransferGold => {
                self.controller.perform_transfer_gold(
                    actor,
                    &action.target,
                    parse_amount(&action.metadata)?,
                )?;
            }
        }

        Ok(())
    }
}

/// A recorded shot hits whenever its metadata field is non-empty.
pub fn is_hit(metadata: &str) -> bool {
    !metadata.trim().is_empty()
}

fn parse_target(target: &str) -> Result<Position> {
    Position::from_algebraic(target.trim()).map_err(|source| RuntimeError::InvalidTarget {
        target: target.to_string(),
        source,
    })
}

fn parse_amount(value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|source| RuntimeError::InvalidAmount {
            value: value.to_string(),
            source,
        })
}
