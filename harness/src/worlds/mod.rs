//! World implementations for the harness runner.

pub mod grid;
pub mod hex;
pub mod table;

pub use grid::{GridParseError, GridWorld};
pub use hex::HexWorld;
pub use table::TableGraph;
