//! Wayfind Harness: concrete search spaces and auditable run reports.
//!
//! The harness runs a world through the search engine and packages the
//! outcome as a canonical JSON report with a content digest. Worlds provide
//! expansion and goal logic only; the harness owns orchestration,
//! serialization and hashing.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod digest;
pub mod logging;
pub mod runner;
pub mod worlds;
