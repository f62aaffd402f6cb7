//! Content loaders for reading game data from files.
//!
//! Rules are TOML, maps are RON. Each loader has a `load` for paths and a
//! `load_str` for inline data.

pub mod config;
pub mod map;

pub use config::ConfigLoader;
pub use map::{MapLayout, MapLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
