use std::borrow::Cow;
use std::fmt;

use crate::config::{EMPTY_TANK_GOLD_DROP, STARTING_LIVES, STARTING_RANGE};

use super::Position;

/// Anything that sits in a board cell.
pub trait BoardEntity {
    fn position(&self) -> Position;

    /// Two-character label shown when the board is rendered.
    fn tile(&self) -> Cow<'_, str>;
}

/// Anything that can be shot at.
pub trait Damageable {
    /// Applies `amount` damage and reports whether the entity must leave the board
    /// together with the loot owed to the attacker.
    fn take_damage(&mut self, amount: u32) -> DamageOutcome;
}

/// Loot credited to an attacker after a successful hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDrops {
    pub ap: u32,
    pub gold: u32,
    pub kills: u32,
    pub lives: u32,
}

impl AttackDrops {
    pub const NONE: Self = Self {
        ap: 0,
        gold: 0,
        kills: 0,
        lives: 0,
    };
}

/// Result of [`Damageable::take_damage`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    pub remove_from_board: bool,
    pub drops: AttackDrops,
}

/// A player-controlled tank.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tank {
    pub position: Position,
    /// Unique player name; primary identifier in action logs.
    pub owner: String,
    /// Short label, accepted as an alternate identifier in action logs.
    pub tile: String,
    pub lives: u32,
    pub ap: u32,
    pub gold: u32,
    pub range: u32,
    pub kills: u32,

    // Accolade stats, reporting only.
    pub total_moves: u32,
    pub total_gold: u32,
}

impl Tank {
    /// Creates a tank with full lives and no AP. The tile defaults to the
    /// first two characters of the owner name.
    pub fn new(
        position: Position,
        owner: impl Into<String>,
        tile: Option<String>,
        starting_gold: u32,
    ) -> Self {
        let owner = owner.into();
        let tile = tile.unwrap_or_else(|| owner.chars().take(2).collect());

        Self {
            position,
            owner,
            tile,
            lives: STARTING_LIVES,
            ap: 0,
            gold: starting_gold,
            range: STARTING_RANGE,
            kills: 0,
            total_moves: 0,
            total_gold: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    /// Relocates the tank and pays for it. Legality is the move rule's job.
    pub fn perform_move(&mut self, target: Position, ap_cost: u32) {
        self.spend_ap(ap_cost);
        self.position = target;
        self.total_moves += 1;
    }

    /// Pays `ap_cost` and extends the fire range by one.
    pub fn perform_upgrade(&mut self, ap_cost: u32) {
        self.spend_ap(ap_cost);
        self.increase_range();
    }

    pub fn increase_range(&mut self) {
        self.range += 1;
    }

    pub fn has_ap(&self, amount: u32) -> bool {
        self.ap >= amount
    }

    pub fn gain_ap(&mut self, amount: u32, max_ap: u32) {
        self.ap = self.ap.saturating_add(amount).min(max_ap);
    }

    pub fn spend_ap(&mut self, amount: u32) {
        self.ap = self.ap.saturating_sub(amount);
    }

    pub fn has_gold(&self, amount: u32) -> bool {
        self.gold >= amount
    }

    pub fn gain_gold(&mut self, amount: u32) {
        self.gold += amount;
        self.total_gold += amount;
    }

    pub fn spend_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_sub(amount);
    }

    /// Takes one life for sharing. Returns true when the tank died doing so.
    pub fn give_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.die();
            return true;
        }
        false
    }

    pub fn receive_life(&mut self) {
        self.lives = (self.lives + 1).min(STARTING_LIVES);
    }

    pub fn gain_attack_drops(&mut self, drops: AttackDrops, max_ap: u32) {
        self.gain_ap(drops.ap, max_ap);
        if drops.gold > 0 {
            self.gain_gold(drops.gold);
        }
        self.kills += drops.kills;
        self.lives = (self.lives + drops.lives).min(STARTING_LIVES);
    }

    fn die(&mut self) {
        self.ap = 0;
    }
}

impl BoardEntity for Tank {
    fn position(&self) -> Position {
        self.position
    }

    fn tile(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.tile)
    }
}

impl Damageable for Tank {
    fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        self.lives = self.lives.saturating_sub(amount);
        if self.lives > 0 {
            return DamageOutcome::default();
        }

        let gold = if self.gold == 0 {
            EMPTY_TANK_GOLD_DROP
        } else {
            self.gold
        };
        self.die();

        DamageOutcome {
            remove_from_board: true,
            drops: AttackDrops {
                gold,
                kills: 1,
                ..AttackDrops::NONE
            },
        }
    }
}

impl fmt::Display for Tank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:15} - {:2},{:2} Lives: {} Range: {} AP: {} Gold: {:2} Total Gold: {:3}",
            self.owner,
            self.position.x,
            self.position.y,
            self.lives,
            self.range,
            self.ap,
            self.gold,
            self.total_gold
        )
    }
}

/// Destructible obstacle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub position: Position,
    pub durability: u32,
}

impl Wall {
    pub fn new(position: Position, durability: u32) -> Self {
        Self {
            position,
            durability,
        }
    }

    pub fn is_standing(&self) -> bool {
        self.durability > 0
    }
}

impl BoardEntity for Wall {
    fn position(&self) -> Position {
        self.position
    }

    fn tile(&self) -> Cow<'_, str> {
        Cow::Owned(format!("W{}", self.durability))
    }
}

impl Damageable for Wall {
    fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        self.durability = self.durability.saturating_sub(amount);
        DamageOutcome {
            remove_from_board: self.durability == 0,
            drops: AttackDrops::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tank() -> Tank {
        Tank::new(Position::new(1, 1), "Ryan", None, 0)
    }

    #[test]
    fn tile_defaults_to_owner_prefix() {
        assert_eq!(tank().tile, "Ry");
        let labelled = Tank::new(Position::ORIGIN, "Beyer", Some("B!".into()), 0);
        assert_eq!(labelled.tile(), "B!");
    }

    #[test]
    fn ap_is_clamped_to_bounds() {
        let mut tank = tank();
        tank.gain_ap(5, 9);
        tank.gain_ap(7, 9);
        assert_eq!(tank.ap, 9);

        tank.spend_ap(20);
        assert_eq!(tank.ap, 0);
        assert!(tank.has_ap(0));
        assert!(!tank.has_ap(1));
    }

    #[test]
    fn gold_gains_are_tracked_for_accolades() {
        let mut tank = tank();
        tank.gain_gold(4);
        tank.spend_gold(3);
        tank.gain_gold(2);
        assert_eq!(tank.gold, 3);
        assert_eq!(tank.total_gold, 6);
    }

    #[test]
    fn non_lethal_damage_drops_nothing() {
        let mut tank = tank();
        let outcome = tank.take_damage(1);
        assert_eq!(tank.lives, 2);
        assert_eq!(outcome, DamageOutcome::default());
    }

    #[test]
    fn lethal_damage_on_broke_tank_drops_three_gold() {
        let mut tank = tank();
        tank.lives = 1;
        tank.ap = 4;

        let outcome = tank.take_damage(1);
        assert!(outcome.remove_from_board);
        assert_eq!(outcome.drops.kills, 1);
        assert_eq!(outcome.drops.gold, 3);
        assert_eq!(tank.ap, 0);
        assert!(!tank.is_alive());
    }

    #[test]
    fn lethal_damage_drops_carried_gold() {
        let mut tank = tank();
        tank.lives = 1;
        tank.gold = 7;

        let outcome = tank.take_damage(3);
        assert_eq!(tank.lives, 0);
        assert_eq!(outcome.drops.gold, 7);
    }

    #[test]
    fn wall_crumbles_at_zero_durability() {
        let mut wall = Wall::new(Position::new(2, 2), 2);
        assert_eq!(wall.tile(), "W2");
        assert!(!wall.take_damage(1).remove_from_board);

        let outcome = wall.take_damage(1);
        assert!(outcome.remove_from_board);
        assert_eq!(outcome.drops, AttackDrops::NONE);
        assert!(!wall.is_standing());
    }

    #[test]
    fn giving_last_life_kills_the_tank() {
        let mut tank = tank();
        tank.ap = 3;
        assert!(!tank.give_life());
        assert!(!tank.give_life());
        assert!(tank.give_life());
        assert_eq!(tank.ap, 0);

        tank.receive_life();
        tank.receive_life();
        tank.receive_life();
        tank.receive_life();
        assert_eq!(tank.lives, STARTING_LIVES);
    }
}
