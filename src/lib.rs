//! A robot on a bounded integer grid where only "safe" cells may be entered.
//!
//! A cell `(x, y)` is safe when it lies inside the grid bounds and the decimal digit sum of
//! `|x * y|` is below a threshold (default bounds `[-999, 999]`, threshold 19). Over the
//! implicit graph of safe, orthogonally adjacent cells the crate answers:
//!
//! - how many cells are reachable from the origin ([`RobotGrid::total_safe_squares`]);
//! - the shortest journey between two cells ([`RobotGrid::shortest_safe_journey`]).

pub mod core;
pub mod grid;
pub mod robot;
pub mod search;

pub use crate::core::coord::Coord;
pub use crate::grid::config::{ConfigError, GridConfig};
pub use crate::grid::safety::{is_safe, DigitSumRule, SafetyOracle};
pub use crate::robot::{RobotGrid, NO_JOURNEY};
pub use crate::search::SearchError;
