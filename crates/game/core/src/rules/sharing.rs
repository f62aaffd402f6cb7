use std::collections::BTreeSet;

use crate::config::STARTING_LIVES;
use crate::state::{Tank, TankId};

use super::{RuleError, check_in_range};

/// Tanks that already shared AP or a life during the current day.
///
/// Both give rules draw on the same list, so a tank gets one gift per day.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayLedger {
    givers: BTreeSet<TankId>,
}

impl DayLedger {
    pub fn has_given(&self, tank: TankId) -> bool {
        self.givers.contains(&tank)
    }

    pub fn record(&mut self, tank: TankId) {
        self.givers.insert(tank);
    }

    pub fn clear(&mut self) {
        self.givers.clear();
    }
}

/// Whether a tank may give one AP to another tank in range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GiveApRule {
    Disabled,
    #[default]
    OncePerDay,
}

impl GiveApRule {
    pub fn can_give_ap(
        &self,
        ledger: &DayLedger,
        actor_id: TankId,
        actor: &Tank,
        target: &Tank,
        amount: u32,
    ) -> Result<(), RuleError> {
        if *self == GiveApRule::Disabled {
            return Err(RuleError::Disabled("sharing AP"));
        }
        if ledger.has_given(actor_id) {
            return Err(RuleError::AlreadyActedToday("shared"));
        }
        if amount != 1 {
            return Err(RuleError::InvalidAmount { amount });
        }
        check_alive(actor, target)?;
        check_in_range(actor, target)?;
        if !actor.has_ap(amount) {
            return Err(RuleError::InsufficientAp {
                required: amount,
                available: actor.ap,
            });
        }

        Ok(())
    }

    pub fn perform_give_ap(
        &self,
        ledger: &mut DayLedger,
        actor_id: TankId,
        actor: &mut Tank,
        target: &mut Tank,
        amount: u32,
        max_ap: u32,
    ) -> Result<(), RuleError> {
        self.can_give_ap(ledger, actor_id, actor, target, amount)?;

        ledger.record(actor_id);
        actor.spend_ap(1);
        target.gain_ap(1, max_ap);

        Ok(())
    }
}

/// Whether a tank may give one of its lives to another tank in range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GiveLifeRule {
    Disabled,
    #[default]
    OncePerDay,
}

impl GiveLifeRule {
    pub fn can_give_life(
        &self,
        ledger: &DayLedger,
        actor_id: TankId,
        actor: &Tank,
        target: &Tank,
    ) -> Result<(), RuleError> {
        if *self == GiveLifeRule::Disabled {
            return Err(RuleError::Disabled("sharing lives"));
        }
        if ledger.has_given(actor_id) {
            return Err(RuleError::AlreadyActedToday("shared"));
        }
        if actor.lives == 0 {
            return Err(RuleError::NoLivesToGive);
        }
        check_alive(actor, target)?;
        check_in_range(actor, target)?;
        if target.lives >= STARTING_LIVES {
            return Err(RuleError::TargetAtMaxLives);
        }

        Ok(())
    }

    /// Moves one life from `actor` to `target`. Returns true when the giver died.
    pub fn perform_give_life(
        &self,
        ledger: &mut DayLedger,
        actor_id: TankId,
        actor: &mut Tank,
        target: &mut Tank,
    ) -> Result<bool, RuleError> {
        self.can_give_life(ledger, actor_id, actor, target)?;

        ledger.record(actor_id);
        let died = actor.give_life();
        target.receive_life();

        Ok(died)
    }
}

fn check_alive(actor: &Tank, target: &Tank) -> Result<(), RuleError> {
    if !actor.is_alive() {
        return Err(RuleError::ActorDestroyed);
    }
    if !target.is_alive() {
        return Err(RuleError::TargetDestroyed);
    }
    Ok(())
}
