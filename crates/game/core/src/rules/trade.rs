use crate::config::DEFAULT_GOLD_PER_AP;
use crate::state::Tank;

use super::RuleError;

/// One row of a trade table: exactly `gold` buys `ap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeRate {
    pub gold: u32,
    pub ap: u32,
}

/// Exchange rate for buying AP with gold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TradeGoldRule {
    /// Any exact multiple of `gold_per_ap`.
    FlatRate { gold_per_ap: u32 },
    /// Only the listed amounts.
    TableRate { rates: Vec<TradeRate> },
}

impl TradeGoldRule {
    pub fn table(rates: impl IntoIterator<Item = (u32, u32)>) -> Self {
        TradeGoldRule::TableRate {
            rates: rates
                .into_iter()
                .map(|(gold, ap)| TradeRate { gold, ap })
                .collect(),
        }
    }

    /// AP bought by `amount` gold, or why that amount is not tradeable.
    pub fn ap_value(&self, amount: u32) -> Result<u32, RuleError> {
        match self {
            TradeGoldRule::FlatRate { gold_per_ap } => {
                if amount == 0 || *gold_per_ap == 0 {
                    return Err(RuleError::InvalidAmount { amount });
                }
                if amount % gold_per_ap != 0 {
                    return Err(RuleError::NotMultiple {
                        amount,
                        divisor: *gold_per_ap,
                    });
                }
                Ok(amount / gold_per_ap)
            }
            TradeGoldRule::TableRate { rates } => rates
                .iter()
                .find(|rate| rate.gold == amount)
                .map(|rate| rate.ap)
                .ok_or(RuleError::NotInTable { amount }),
        }
    }

    pub fn can_trade_gold(&self, tank: &Tank, amount: u32) -> Result<u32, RuleError> {
        if !tank.is_alive() {
            return Err(RuleError::ActorDestroyed);
        }
        let ap = self.ap_value(amount)?;
        if !tank.has_gold(amount) {
            return Err(RuleError::InsufficientGold {
                required: amount,
                available: tank.gold,
            });
        }
        Ok(ap)
    }

    /// Converts `amount` gold into AP and returns the AP bought (before clamping).
    pub fn perform_trade_gold(
        &self,
        tank: &mut Tank,
        amount: u32,
        max_ap: u32,
    ) -> Result<u32, RuleError> {
        let ap = self.can_trade_gold(tank, amount)?;
        tank.spend_gold(amount);
        tank.gain_ap(ap, max_ap);
        Ok(ap)
    }
}

impl Default for TradeGoldRule {
    fn default() -> Self {
        TradeGoldRule::FlatRate {
            gold_per_ap: DEFAULT_GOLD_PER_AP,
        }
    }
}
