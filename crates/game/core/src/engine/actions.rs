use tracing::{debug, info, warn};

use crate::config::FIRE_DAMAGE;
use crate::rules::{MoveError, RuleError};
use crate::state::{AttackDrops, Damageable, Occupant, Position};

use super::{ControllerError, GameController, tank_pair_mut};

/// Result of a legal shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// AP was spent, nothing was damaged.
    Miss,
    Hit {
        target: Occupant,
        /// The target left the board.
        destroyed: bool,
        drops: AttackDrops,
    },
}

impl GameController {
    /// Moves a tank one cell. Illegal moves are logged and skipped.
    pub fn perform_move(&mut self, owner: &str, target: Position) -> Result<(), ControllerError> {
        let id = self.lookup(owner)?;
        let rule = self.rules.move_rule();
        let tank = &mut self.tanks[id.0 as usize];

        match rule.perform_move(&mut self.board, id, tank, target) {
            Ok(()) => {
                debug!(owner, %target, "moved");
                Ok(())
            }
            Err(MoveError::State(err)) => Err(err.into()),
            Err(err) => {
                warn!(owner, %target, %err, "move skipped");
                debug!(board = %self.render_board(), "board at skipped move");
                Ok(())
            }
        }
    }

    /// Fires at a cell. `does_hit` decides whether the shot lands.
    pub fn perform_fire(
        &mut self,
        owner: &str,
        target: Position,
        does_hit: bool,
    ) -> Result<FireOutcome, ControllerError> {
        let id = self.lookup(owner)?;
        let index = id.0 as usize;
        let actor = &self.tanks[index];

        if !actor.is_alive() {
            return Err(RuleError::ActorDestroyed.into());
        }
        let distance = actor.position.distance(target);
        if distance > actor.range {
            return Err(RuleError::OutOfRange {
                distance,
                range: actor.range,
            }
            .into());
        }
        let cost = self.rules.fire_ap_cost();
        if !actor.has_ap(cost) {
            return Err(RuleError::InsufficientAp {
                required: cost,
                available: actor.ap,
            }
            .into());
        }
        let Some(occupant) = self.board.occupant(target)? else {
            debug!(board = %self.render_board(), "board at shot with no target");
            return Err(RuleError::NoTarget { position: target }.into());
        };
        if !self
            .board
            .does_line_of_sight_exist(actor.position, target, &[])
        {
            debug!(board = %self.render_board(), "board at blocked shot");
            return Err(ControllerError::NoLineOfSight {
                from: actor.position,
                to: target,
            });
        }

        self.tanks[index].spend_ap(cost);
        if !does_hit {
            debug!(owner, %target, "missed");
            return Ok(FireOutcome::Miss);
        }

        let outcome = match occupant {
            Occupant::Tank(victim) => self.tanks[victim.0 as usize].take_damage(FIRE_DAMAGE),
            Occupant::Wall(wall) => self.walls[wall.0 as usize].take_damage(FIRE_DAMAGE),
        };
        self.tanks[index].gain_attack_drops(outcome.drops, self.rules.max_ap());

        if outcome.remove_from_board {
            self.board.remove_entity(occupant, target)?;
        }
        if outcome.drops.kills > 0 {
            info!(owner, victim = %occupant, gold = outcome.drops.gold, "tank destroyed");
        } else if outcome.remove_from_board {
            info!(owner, wall = %occupant, "wall destroyed");
        } else {
            debug!(owner, %occupant, "hit");
        }

        Ok(FireOutcome::Hit {
            target: occupant,
            destroyed: outcome.remove_from_board,
            drops: outcome.drops,
        })
    }

    /// Extends a tank's range by one.
    pub fn perform_upgrade(&mut self, owner: &str) -> Result<(), ControllerError> {
        let id = self.lookup(owner)?;
        let rule = self.rules.range_increase();
        rule.perform_range_increase(&mut self.tanks[id.0 as usize])?;
        debug!(owner, "upgraded range");
        Ok(())
    }

    pub fn perform_transfer_gold(
        &mut self,
        owner: &str,
        target: &str,
        amount: u32,
    ) -> Result<(), ControllerError> {
        let (actor_id, target_id) = (self.lookup(owner)?, self.lookup(target)?);
        let rule = self.rules.gold_transfer();

        if let Ok((actor, target)) = tank_pair_mut(&mut self.tanks, actor_id, target_id) {
            let _ = rule.perform_transfer_gold(actor, target, amount, &mut self.council);
        }
        Ok(())
    }

    pub fn perform_share_actions(
        &mut self,
        owner: &str,
        target: &str,
        amount: u32,
    ) -> Result<(), ControllerError> {
        let (actor_id, target_id) = (self.lookup(owner)?, self.lookup(target)?);
        let (rule, max_ap) = (self.rules.give_ap(), self.rules.max_ap());

        if let Ok((actor, target)) = tank_pair_mut(&mut self.tanks, actor_id, target_id) {
            let ledger = self.rules.ledger_mut();
            let _ = rule.perform_give_ap(ledger, actor_id, actor, target, amount, max_ap);
        }
        Ok(())
    }

    /// Gives one life away. A giver left with no lives leaves the board.
    pub fn perform_share_life(&mut self, owner: &str, target: &str) -> Result<(), ControllerError> {
        let (actor_id, target_id) = (self.lookup(owner)?, self.lookup(target)?);
        let rule = self.rules.give_life();

        let Ok((actor, target)) = tank_pair_mut(&mut self.tanks, actor_id, target_id) else {
            return Ok(());
        };
        let ledger = self.rules.ledger_mut();
        if let Ok(true) = rule.perform_give_life(ledger, actor_id, actor, target) {
            let position = actor.position;
            self.board
                .remove_entity(Occupant::Tank(actor_id), position)?;
            info!(owner, "tank gave its last life");
        }
        Ok(())
    }

    pub fn perform_trade_gold(&mut self, owner: &str, amount: u32) -> Result<(), ControllerError> {
        let id = self.lookup(owner)?;
        let max_ap = self.rules.max_ap();
        let tank = &mut self.tanks[id.0 as usize];
        let _ = self.rules.trade_gold().perform_trade_gold(tank, amount, max_ap);
        Ok(())
    }
}
