use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

/// Default lower bound on both axes.
pub const MIN: i32 = -999;
/// Default upper bound on both axes.
pub const MAX: i32 = 999;

/// A closed range `[min, max]` applied to both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridBounds {
    pub min: i32,
    pub max: i32,
}

impl GridBounds {
    #[inline]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        self.contains_xy(c.x, c.y)
    }

    #[inline]
    pub fn contains_xy(self, x: i32, y: i32) -> bool {
        x >= self.min && x <= self.max && y >= self.min && y <= self.max
    }

    /// Cells per axis (`0` for an empty range).
    pub fn side(self) -> u64 {
        if self.min > self.max {
            0
        } else {
            (i64::from(self.max) - i64::from(self.min) + 1) as u64
        }
    }

    /// Total number of in-bounds cells.
    pub fn cell_count(self) -> u64 {
        self.side().saturating_mul(self.side())
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::new(MIN, MAX)
    }
}
