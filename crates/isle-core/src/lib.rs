//! **isle-core**: geometry primitives shared by the *isle* crates.
//!
//! This crate provides the grid coordinates used everywhere else: a
//! [`Point`], the half-open rectangle [`Range`] and the eight ordered
//! compass directions [`Dir`] that define tile adjacency.

pub mod geom;

pub use geom::{Dir, Point, Range};
