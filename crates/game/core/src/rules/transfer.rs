use crate::state::{Council, Tank};

use super::{RuleError, check_in_range};

/// Whether and how tanks may hand gold to each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GoldTransferRule {
    #[default]
    Disabled,
    /// The sender pays `tax` on top of the amount; the council keeps the tax.
    Taxed { tax: u32 },
}

impl GoldTransferRule {
    pub fn can_transfer_gold(
        &self,
        actor: &Tank,
        target: &Tank,
        amount: u32,
    ) -> Result<(), RuleError> {
        let GoldTransferRule::Taxed { tax } = *self else {
            return Err(RuleError::Disabled("gold transfer"));
        };

        if !actor.is_alive() {
            return Err(RuleError::ActorDestroyed);
        }
        if !target.is_alive() {
            return Err(RuleError::TargetDestroyed);
        }
        if amount == 0 {
            return Err(RuleError::InvalidAmount { amount });
        }
        check_in_range(actor, target)?;

        let required = amount.saturating_add(tax);
        if !actor.has_gold(required) {
            return Err(RuleError::InsufficientGold {
                required,
                available: actor.gold,
            });
        }

        Ok(())
    }

    pub fn perform_transfer_gold(
        &self,
        actor: &mut Tank,
        target: &mut Tank,
        amount: u32,
        council: &mut Council,
    ) -> Result<(), RuleError> {
        self.can_transfer_gold(actor, target, amount)?;

        let tax = match *self {
            GoldTransferRule::Taxed { tax } => tax,
            GoldTransferRule::Disabled => 0,
        };
        actor.spend_gold(amount + tax);
        target.gain_gold(amount);
        council.deposit(tax);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    fn pair() -> (Tank, Tank) {
        let actor = Tank::new(Position::new(0, 0), "Ryan", None, 10);
        let target = Tank::new(Position::new(2, 1), "Beyer", None, 0);
        (actor, target)
    }

    #[test]
    fn disabled_rule_always_fails() {
        let (actor, target) = pair();
        assert_eq!(
            GoldTransferRule::Disabled.can_transfer_gold(&actor, &target, 1),
            Err(RuleError::Disabled("gold transfer"))
        );
    }

    #[test]
    fn taxed_transfer_pays_council() {
        let (mut actor, mut target) = pair();
        let mut council = Council::new();
        let rule = GoldTransferRule::Taxed { tax: 1 };

        rule.perform_transfer_gold(&mut actor, &mut target, 4, &mut council)
            .unwrap();

        assert_eq!(actor.gold, 5);
        assert_eq!(target.gold, 4);
        assert_eq!(council.coffer(), 1);
    }

    #[test]
    fn sender_must_cover_amount_and_tax() {
        let (mut actor, mut target) = pair();
        let mut council = Council::new();
        let rule = GoldTransferRule::Taxed { tax: 2 };

        let err = rule
            .perform_transfer_gold(&mut actor, &mut target, 9, &mut council)
            .unwrap_err();
        assert_eq!(
            err,
            RuleError::InsufficientGold {
                required: 11,
                available: 10
            }
        );
        assert_eq!(actor.gold, 10);
        assert_eq!(council.coffer(), 0);
    }

    #[test]
    fn target_must_be_in_range() {
        let (actor, mut target) = pair();
        target.position = Position::new(3, 0);
        assert!(matches!(
            GoldTransferRule::Taxed { tax: 0 }.can_transfer_gold(&actor, &target, 1),
            Err(RuleError::OutOfRange {
                distance: 3,
                range: 2
            })
        ));
    }
}
