pub mod board;
pub mod common;
pub mod economy;
pub mod entities;

pub use board::{Board, LINE_OF_SIGHT_TOLERANCE};
pub use common::{EntityKind, Occupant, ParsePositionError, Position, TankId, WallId};
pub use economy::{Council, GoldMine};
pub use entities::{AttackDrops, BoardEntity, DamageOutcome, Damageable, Tank, Wall};
