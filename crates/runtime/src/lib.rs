//! Action log replay for tank games.
//!
//! This crate pulls recorded player actions from an [`ActionSource`] and
//! applies them, in order, to a [`game_core::GameController`] through the
//! [`Interactor`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error type downstream clients handle
//! - [`repository`] holds the action record format and its sources
//! - [`interactor`] detects day boundaries and dispatches each action
pub mod api;
pub mod interactor;
pub mod repository;

pub use api::{Result, RuntimeError};
pub use interactor::{Interactor, ReplaySummary, is_hit};
pub use repository::{
    ActionRecord, ActionSource, ActionType, CsvActionSource, InMemoryActionSource,
};
