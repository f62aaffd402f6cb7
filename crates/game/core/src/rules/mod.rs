//! Pluggable rule policies.
//!
//! Each policy is a small tagged enum chosen when a season is set up, and
//! [`GameRules`] bundles them with the scalar tunables. Policies expose a
//! `can_*` predicate and a `perform_*` mutation. `perform_*` re-checks the
//! predicate, so a rejected action never touches state.
//!
//! The only state carried between calls is the [`DayLedger`] of tanks that
//! already shared today, reset by [`GameRules::on_start_of_day`].

pub mod error;
pub mod movement;
pub mod range;
pub mod sharing;
pub mod trade;
pub mod transfer;

pub use error::{MoveError, RuleError};
pub use movement::MoveRule;
pub use range::RangeIncreaseRule;
pub use sharing::{DayLedger, GiveApRule, GiveLifeRule};
pub use trade::{TradeGoldRule, TradeRate};
pub use transfer::GoldTransferRule;

use crate::config::{
    DEFAULT_AP_PER_TURN, DEFAULT_FIRE_AP_COST, DEFAULT_MAX_AP, DEFAULT_STARTING_GOLD,
    DEFAULT_WALL_DURABILITY,
};
use crate::state::Tank;

/// Rule bundle for one game.
///
/// Tunables and policies are fixed once the bundle is built; only the
/// day ledger changes during play.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GameRules {
    fire_ap_cost: u32,
    max_ap: u32,
    starting_gold: u32,
    ap_per_turn: u32,
    wall_durability: u32,
    move_rule: MoveRule,
    range_increase: RangeIncreaseRule,
    gold_transfer: GoldTransferRule,
    give_ap: GiveApRule,
    give_life: GiveLifeRule,
    trade_gold: TradeGoldRule,
    #[cfg_attr(feature = "serde", serde(skip))]
    ledger: DayLedger,
}

impl GameRules {
    pub fn new() -> Self {
        Self {
            fire_ap_cost: DEFAULT_FIRE_AP_COST,
            max_ap: DEFAULT_MAX_AP,
            starting_gold: DEFAULT_STARTING_GOLD,
            ap_per_turn: DEFAULT_AP_PER_TURN,
            wall_durability: DEFAULT_WALL_DURABILITY,
            move_rule: MoveRule::default(),
            range_increase: RangeIncreaseRule::default(),
            gold_transfer: GoldTransferRule::default(),
            give_ap: GiveApRule::default(),
            give_life: GiveLifeRule::default(),
            trade_gold: TradeGoldRule::default(),
            ledger: DayLedger::default(),
        }
    }

    // ===== builder =====

    #[must_use]
    pub fn with_fire_ap_cost(mut self, cost: u32) -> Self {
        self.fire_ap_cost = cost;
        self
    }

    #[must_use]
    pub fn with_max_ap(mut self, max_ap: u32) -> Self {
        self.max_ap = max_ap;
        self
    }

    #[must_use]
    pub fn with_starting_gold(mut self, gold: u32) -> Self {
        self.starting_gold = gold;
        self
    }

    #[must_use]
    pub fn with_ap_per_turn(mut self, ap: u32) -> Self {
        self.ap_per_turn = ap;
        self
    }

    #[must_use]
    pub fn with_wall_durability(mut self, durability: u32) -> Self {
        self.wall_durability = durability;
        self
    }

    #[must_use]
    pub fn with_move_rule(mut self, rule: MoveRule) -> Self {
        self.move_rule = rule;
        self
    }

    #[must_use]
    pub fn with_range_increase(mut self, rule: RangeIncreaseRule) -> Self {
        self.range_increase = rule;
        self
    }

    #[must_use]
    pub fn with_gold_transfer(mut self, rule: GoldTransferRule) -> Self {
        self.gold_transfer = rule;
        self
    }

    #[must_use]
    pub fn with_give_ap(mut self, rule: GiveApRule) -> Self {
        self.give_ap = rule;
        self
    }

    #[must_use]
    pub fn with_give_life(mut self, rule: GiveLifeRule) -> Self {
        self.give_life = rule;
        self
    }

    #[must_use]
    pub fn with_trade_gold(mut self, rule: TradeGoldRule) -> Self {
        self.trade_gold = rule;
        self
    }

    // ===== accessors =====

    pub fn fire_ap_cost(&self) -> u32 {
        self.fire_ap_cost
    }

    pub fn max_ap(&self) -> u32 {
        self.max_ap
    }

    pub fn starting_gold(&self) -> u32 {
        self.starting_gold
    }

    pub fn ap_per_turn(&self) -> u32 {
        self.ap_per_turn
    }

    pub fn wall_durability(&self) -> u32 {
        self.wall_durability
    }

    pub fn move_rule(&self) -> MoveRule {
        self.move_rule
    }

    pub fn range_increase(&self) -> RangeIncreaseRule {
        self.range_increase
    }

    pub fn gold_transfer(&self) -> GoldTransferRule {
        self.gold_transfer
    }

    pub fn give_ap(&self) -> GiveApRule {
        self.give_ap
    }

    pub fn give_life(&self) -> GiveLifeRule {
        self.give_life
    }

    pub fn trade_gold(&self) -> &TradeGoldRule {
        &self.trade_gold
    }

    pub fn ledger(&self) -> &DayLedger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut DayLedger {
        &mut self.ledger
    }

    /// Resets once-per-day trackers. Called exactly once per new log date.
    pub fn on_start_of_day(&mut self) {
        self.ledger.clear();
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared range check for every targeted action.
pub(crate) fn check_in_range(actor: &Tank, target: &Tank) -> Result<(), RuleError> {
    let distance = actor.position.distance(target.position);
    if distance > actor.range {
        return Err(RuleError::OutOfRange {
            distance,
            range: actor.range,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TankId;

    #[test]
    fn defaults_match_classic_season() {
        let rules = GameRules::default();
        assert_eq!(rules.fire_ap_cost(), 2);
        assert_eq!(rules.max_ap(), 9);
        assert_eq!(rules.starting_gold(), 0);
        assert_eq!(rules.ap_per_turn(), 2);
        assert_eq!(rules.wall_durability(), 5);
        assert_eq!(rules.move_rule(), MoveRule { ap_cost: 1 });
        assert_eq!(rules.range_increase(), RangeIncreaseRule::ApCost { cost: 5 });
        assert_eq!(rules.gold_transfer(), GoldTransferRule::Disabled);
        assert_eq!(rules.trade_gold(), &TradeGoldRule::FlatRate { gold_per_ap: 3 });
    }

    #[test]
    fn start_of_day_clears_ledger() {
        let mut rules = GameRules::new();
        rules.ledger_mut().record(TankId(0));
        rules.ledger_mut().record(TankId(1));

        rules.on_start_of_day();
        assert!(!rules.ledger().has_given(TankId(0)));
        assert!(!rules.ledger().has_given(TankId(1)));
    }
}
