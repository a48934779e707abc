use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn manhattan_distance(self, other: Coord) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx + dy
    }

    /// `self + step`, or `None` when either axis leaves the `i32` range.
    #[inline]
    pub fn checked_step(self, step: Coord) -> Option<Coord> {
        Some(Coord::new(
            self.x.checked_add(step.x)?,
            self.y.checked_add(step.y)?,
        ))
    }

    #[inline]
    pub fn is_orthogonal_neighbor(self, other: Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

/// The 4 orthogonal steps, in expansion order: +x, -x, +y, -y.
pub const ORTHOGONAL_STEPS: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_step_stops_at_i32_edge() {
        let edge = Coord::new(i32::MAX, 0);
        assert_eq!(edge.checked_step(ORTHOGONAL_STEPS[0]), None);
        assert_eq!(
            edge.checked_step(ORTHOGONAL_STEPS[1]),
            Some(Coord::new(i32::MAX - 1, 0))
        );
    }

    #[test]
    fn manhattan_distance_is_widened() {
        let a = Coord::new(i32::MIN, i32::MIN);
        let b = Coord::new(i32::MAX, i32::MAX);
        assert_eq!(a.manhattan_distance(b), 2 * (u32::MAX as u64));
        assert_eq!(Coord::new(3, -4).manhattan_distance(Coord::ORIGIN), 7);
    }
}
