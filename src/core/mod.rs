//! Value types shared by the safety rule and the traversal engine.
//!
//! - [`coord`]: integer coordinates and the orthogonal step set.
//! - [`cell_key`]: coordinates packed into a single `i64`, used as visited-set keys.

pub mod cell_key;
pub mod coord;
