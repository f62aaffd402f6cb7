use crate::config::DEFAULT_GOLD_PER_DAY;

use super::{Position, Tank};

/// A group of cells paying out gold to the tanks parked on them each day.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldMine {
    spaces: Vec<Position>,
    gold_per_day: u32,
}

impl GoldMine {
    pub fn new(gold_per_day: u32) -> Self {
        Self {
            spaces: Vec::new(),
            gold_per_day,
        }
    }

    /// Registers a cell as part of the mine. Duplicates are ignored.
    pub fn add_space(&mut self, position: Position) {
        if !self.spaces.contains(&position) {
            self.spaces.push(position);
        }
    }

    #[must_use]
    pub fn with_space(mut self, position: Position) -> Self {
        self.add_space(position);
        self
    }

    pub fn spaces(&self) -> &[Position] {
        &self.spaces
    }

    pub fn gold_per_day(&self) -> u32 {
        self.gold_per_day
    }

    pub fn contains(&self, position: Position) -> bool {
        self.spaces.contains(&position)
    }

    /// Splits the daily yield evenly (rounding down) between living tanks on the mine.
    ///
    /// Returns the amount paid to each tank, `0` when nobody was present.
    pub fn award_gold(&self, tanks: &mut [Tank]) -> u32 {
        let occupants = tanks
            .iter()
            .filter(|tank| tank.is_alive() && self.contains(tank.position))
            .count();
        if occupants == 0 {
            return 0;
        }

        let award = self.gold_per_day / occupants as u32;
        for tank in tanks
            .iter_mut()
            .filter(|tank| tank.is_alive() && self.contains(tank.position))
        {
            tank.gain_gold(award);
        }

        award
    }
}

impl Default for GoldMine {
    fn default() -> Self {
        Self::new(DEFAULT_GOLD_PER_DAY)
    }
}

/// Shared coffer collecting taxes from gold transfers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Council {
    coffer: u32,
}

impl Council {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposit(&mut self, amount: u32) {
        self.coffer += amount;
    }

    pub fn coffer(&self) -> u32 {
        self.coffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tanks() -> Vec<Tank> {
        vec![
            Tank::new(Position::new(2, 2), "Ryan", None, 0),
            Tank::new(Position::new(4, 1), "Beyer", None, 0),
            Tank::new(Position::new(0, 0), "Outside", None, 0),
        ]
    }

    fn mine() -> GoldMine {
        GoldMine::new(8)
            .with_space(Position::new(2, 2))
            .with_space(Position::new(4, 1))
    }

    #[test]
    fn splits_yield_between_occupants() {
        let mut tanks = tanks();
        assert_eq!(mine().award_gold(&mut tanks), 4);
        assert_eq!(tanks[0].gold, 4);
        assert_eq!(tanks[1].gold, 4);
        assert_eq!(tanks[2].gold, 0);
    }

    #[test]
    fn single_occupant_takes_everything() {
        let mut tanks = tanks();
        tanks[1].position = Position::new(5, 5);
        mine().award_gold(&mut tanks);
        assert_eq!(tanks[0].gold, 8);
        assert_eq!(tanks[1].gold, 0);
    }

    #[test]
    fn empty_mine_changes_nothing() {
        let mut tanks = tanks();
        tanks[0].position = Position::new(6, 6);
        tanks[1].position = Position::new(5, 5);
        let before = tanks.clone();

        assert_eq!(mine().award_gold(&mut tanks), 0);
        assert_eq!(tanks, before);
    }

    #[test]
    fn dead_tanks_do_not_share() {
        let mut tanks = tanks();
        tanks[1].lives = 0;
        mine().award_gold(&mut tanks);
        assert_eq!(tanks[0].gold, 8);
        assert_eq!(tanks[1].gold, 0);
    }

    #[test]
    fn council_accumulates_deposits() {
        let mut council = Council::new();
        council.deposit(1);
        council.deposit(2);
        assert_eq!(council.coffer(), 3);
    }
}
