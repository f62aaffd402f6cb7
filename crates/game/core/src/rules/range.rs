use crate::config::DEFAULT_UPGRADE_AP_COST;
use crate::state::Tank;

use super::RuleError;

/// How a tank pays to extend its fire range by one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RangeIncreaseRule {
    ApCost { cost: u32 },
    GoldCost { cost: u32 },
}

impl RangeIncreaseRule {
    pub fn can_increase_range(&self, tank: &Tank) -> Result<(), RuleError> {
        if !tank.is_alive() {
            return Err(RuleError::ActorDestroyed);
        }

        match *self {
            RangeIncreaseRule::ApCost { cost } if !tank.has_ap(cost) => {
                Err(RuleError::InsufficientAp {
                    required: cost,
                    available: tank.ap,
                })
            }
            RangeIncreaseRule::GoldCost { cost } if !tank.has_gold(cost) => {
                Err(RuleError::InsufficientGold {
                    required: cost,
                    available: tank.gold,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn perform_range_increase(&self, tank: &mut Tank) -> Result<(), RuleError> {
        self.can_increase_range(tank)?;

        match *self {
            RangeIncreaseRule::ApCost { cost } => tank.perform_upgrade(cost),
            RangeIncreaseRule::GoldCost { cost } => {
                tank.spend_gold(cost);
                tank.increase_range();
            }
        }

        Ok(())
    }
}

impl Default for RangeIncreaseRule {
    fn default() -> Self {
        RangeIncreaseRule::ApCost {
            cost: DEFAULT_UPGRADE_AP_COST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    fn tank(ap: u32, gold: u32) -> Tank {
        let mut tank = Tank::new(Position::ORIGIN, "Ryan", None, gold);
        tank.ap = ap;
        tank
    }

    #[test]
    fn ap_cost_upgrade() {
        let rule = RangeIncreaseRule::ApCost { cost: 5 };
        let mut poor = tank(4, 0);
        assert_eq!(
            rule.perform_range_increase(&mut poor),
            Err(RuleError::InsufficientAp {
                required: 5,
                available: 4
            })
        );
        assert_eq!(poor.range, 2);

        let mut rich = tank(6, 0);
        rule.perform_range_increase(&mut rich).unwrap();
        assert_eq!(rich.range, 3);
        assert_eq!(rich.ap, 1);
    }

    #[test]
    fn gold_cost_upgrade_leaves_ap_alone() {
        let rule = RangeIncreaseRule::GoldCost { cost: 4 };
        let mut tank = tank(2, 10);
        rule.perform_range_increase(&mut tank).unwrap();
        assert_eq!(tank.range, 3);
        assert_eq!(tank.gold, 6);
        assert_eq!(tank.ap, 2);

        tank.gold = 3;
        assert!(matches!(
            rule.can_increase_range(&tank),
            Err(RuleError::InsufficientGold { .. })
        ));
    }
}
