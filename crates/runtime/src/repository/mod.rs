//! Action records and the sources that yield them.
//!
//! - [`types`]: the record format and the closed set of action types
//! - [`traits`]: the sequential pull contract every source honours
//! - [`memory`] and [`file`]: in-memory and CSV-backed sources

pub mod file;
pub mod memory;
pub mod traits;
pub mod types;

pub use file::CsvActionSource;
pub use memory::InMemoryActionSource;
pub use traits::ActionSource;
pub use types::{ActionRecord, ActionType};
