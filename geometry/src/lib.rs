//! Wayfind Geometry: immutable grid coordinate value types.
//!
//! These are the node types the harness worlds feed into the search engine.
//! The search crate never depends on this crate; coordinates are opaque to it.
//!
//! # Modules
//!
//! - [`cart2d`] -- cartesian points, vectors and inclusive rectangles
//! - [`hex2d`] -- cube-coordinate hex points and vectors (`x + y + z = 0`)
//!
//! All coordinates are `i64`. Every type is `Copy + Eq + Hash`, so it can be
//! used directly as a search node or map key.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cart2d;
pub mod hex2d;
