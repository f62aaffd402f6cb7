//! Board and entity state.
//!
//! This module owns the grid, the entities placed on it, and the economy
//! objects (gold mines, council). Everything here is plain data with local
//! invariants; cross-entity orchestration lives in [`crate::engine`].
mod error;
pub mod types;

pub use error::StateError;
pub use types::{
    AttackDrops, Board, BoardEntity, Council, DamageOutcome, Damageable, EntityKind, GoldMine,
    LINE_OF_SIGHT_TOLERANCE, Occupant, ParsePositionError, Position, TankId, Tank, Wall, WallId,
};
