//! Deterministic tank battle rules and state.
//!
//! `game-core` defines the board, the entities that live on it, the pluggable
//! rule policies, and the [`GameController`] that applies player actions.
//! Nothing here reads files, clocks, or randomness, so replaying the same
//! actions against the same setup always produces the same state.
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod state;

pub use engine::{ControllerError, FireOutcome, GameController};
pub use error::{ErrorSeverity, GameError};
pub use rules::{
    DayLedger, GameRules, GiveApRule, GiveLifeRule, GoldTransferRule, MoveError, MoveRule,
    RangeIncreaseRule, RuleError, TradeGoldRule, TradeRate,
};
pub use state::{
    AttackDrops, Board, BoardEntity, Council, DamageOutcome, Damageable, EntityKind, GoldMine,
    Occupant, ParsePositionError, Position, StateError, Tank, TankId, Wall, WallId,
};
