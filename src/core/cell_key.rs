use crate::core::coord::Coord;

/// A grid cell packed into a single `i64`.
///
/// Visited sets hold millions of these, so the key is kept as one word that hashes and
/// compares cheaply. The packing is a bijection between `Coord` and `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey(i64);

impl CellKey {
    pub fn from_coord(c: Coord) -> CellKey {
        // High 32 bits = x, low 32 bits = y.
        CellKey(((c.x as i64) << 32) | (c.y as u32 as i64))
    }

    pub fn coord(self) -> Coord {
        let x = (self.0 >> 32) as i32;
        let y = self.0 as i32;
        Coord { x, y }
    }
}
