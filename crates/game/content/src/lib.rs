//! Data-driven game setup.
//!
//! This crate turns data files into a ready-to-play [`game_core::GameController`]:
//! - Rule bundles (data-driven via TOML, or one of the built-in [`presets`])
//! - Map layouts: board size, walls, tanks, gold mines (data-driven via RON)
//!
//! Loaders only call the controller's public setup operations, so a layout
//! can never produce a board the controller itself would reject.

pub mod presets;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use presets::Preset;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MapLayout, MapLoader};
