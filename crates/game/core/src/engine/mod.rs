//! Game orchestration.
//!
//! The [`GameController`] owns the board, the tank and wall rosters, the gold
//! mines, the council, and the rule bundle. After setup it is the only thing
//! that mutates any of them. Each player action is one method
//! (see `actions.rs`), and [`GameController::start_of_turn`] advances the day.

mod actions;
mod errors;
mod turns;

pub use actions::FireOutcome;
pub use errors::ControllerError;

use crate::rules::{GameRules, RuleError};
use crate::state::{
    Board, BoardEntity, Council, GoldMine, Occupant, Position, Tank, TankId, Wall, WallId,
};

/// Authoritative state for one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameController {
    board: Board,
    /// Indexed by [`TankId`]. Dead tanks stay here after leaving the board.
    tanks: Vec<Tank>,
    /// Indexed by [`WallId`]. Destroyed walls stay here after leaving the board.
    walls: Vec<Wall>,
    gold_mines: Vec<GoldMine>,
    council: Council,
    rules: GameRules,
}

impl GameController {
    pub fn new(width: u32, height: u32, rules: GameRules) -> Self {
        Self {
            board: Board::new(width, height),
            tanks: Vec::new(),
            walls: Vec::new(),
            gold_mines: Vec::new(),
            council: Council::new(),
            rules,
        }
    }

    // ===== setup =====

    /// Places a wall with the rule bundle's default durability.
    pub fn add_wall(&mut self, position: Position) -> Result<WallId, ControllerError> {
        let durability = self.rules.wall_durability();
        self.add_wall_with_durability(position, durability)
    }

    pub fn add_wall_with_durability(
        &mut self,
        position: Position,
        durability: u32,
    ) -> Result<WallId, ControllerError> {
        let id = WallId(self.walls.len() as u32);
        self.board.add_entity(Occupant::Wall(id), position)?;
        self.walls.push(Wall::new(position, durability));
        Ok(id)
    }

    /// Places a new tank. `tile` defaults to the first two characters of `owner`.
    pub fn add_tank(
        &mut self,
        position: Position,
        owner: impl Into<String>,
        tile: Option<String>,
    ) -> Result<TankId, ControllerError> {
        let owner = owner.into();
        if self.tanks.iter().any(|tank| tank.owner == owner) {
            return Err(ControllerError::DuplicateOwner(owner));
        }

        let id = TankId(self.tanks.len() as u32);
        self.board.add_entity(Occupant::Tank(id), position)?;
        self.tanks.push(Tank::new(
            position,
            owner,
            tile,
            self.rules.starting_gold(),
        ));
        Ok(id)
    }

    pub fn add_gold_mine(&mut self, mine: GoldMine) {
        self.gold_mines.push(mine);
    }

    // ===== queries =====

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn gold_mines(&self) -> &[GoldMine] {
        &self.gold_mines
    }

    pub fn council(&self) -> &Council {
        &self.council
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Resolves an owner name or tile label to its tank.
    pub fn tank(&self, owner: &str) -> Result<&Tank, ControllerError> {
        let id = self.lookup(owner)?;
        Ok(&self.tanks[id.0 as usize])
    }

    /// Grid of two-character tiles, one row per line.
    pub fn render_board(&self) -> String {
        self.board.render(|occupant| match occupant {
            Occupant::Tank(id) => self.tanks[id.0 as usize].tile().into_owned(),
            Occupant::Wall(id) => self.walls[id.0 as usize].tile().into_owned(),
        })
    }

    /// First tank whose owner or tile matches `owner` exactly.
    fn lookup(&self, owner: &str) -> Result<TankId, ControllerError> {
        self.tanks
            .iter()
            .position(|tank| tank.owner == owner || tank.tile == owner)
            .map(|index| TankId(index as u32))
            .ok_or_else(|| ControllerError::NotFound(owner.to_string()))
    }
}

/// Borrows two distinct tanks mutably.
fn tank_pair_mut(
    tanks: &mut [Tank],
    actor: TankId,
    target: TankId,
) -> Result<(&mut Tank, &mut Tank), RuleError> {
    let (a, b) = (actor.0 as usize, target.0 as usize);
    if a == b {
        return Err(RuleError::SelfTarget);
    }

    if a < b {
        let (left, right) = tanks.split_at_mut(b);
        Ok((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = tanks.split_at_mut(a);
        Ok((&mut right[0], &mut left[b]))
    }
}
