//! The shared breadth-first loop.
//!
//! One traversal is described by a [`Traversal`]: a start cell, an optional target (early exit
//! on first dequeue) and whether parent links are kept for path reconstruction. Everything the
//! loop allocates is owned by the call and handed back in the [`TraversalOutcome`].

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::core::cell_key::CellKey;
use crate::core::coord::{Coord, ORTHOGONAL_STEPS};
use crate::grid::safety::SafetyOracle;
use crate::search::resources::Budget;

const STAGE: &str = "bfs";

/// Slots added to the visited set whenever it runs full (doubling beyond this).
const MIN_VISITED_GROWTH: usize = 1 << 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    pub start: Coord,
    pub target: Option<Coord>,
    pub record_parents: bool,
}

impl Traversal {
    /// Explore everything reachable from `start`.
    pub fn exhaustive(start: Coord) -> Self {
        Self {
            start,
            target: None,
            record_parents: false,
        }
    }

    /// Stop as soon as `target` is dequeued.
    pub fn towards(start: Coord, target: Coord) -> Self {
        Self {
            start,
            target: Some(target),
            record_parents: false,
        }
    }

    pub fn with_parents(mut self) -> Self {
        self.record_parents = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct TraversalOutcome {
    pub start: Coord,
    /// Every cell admitted to the visited set, `start` included.
    pub visited: FxHashSet<CellKey>,
    /// Distance of the target, if it was dequeued.
    pub distance: Option<u32>,
    /// Index of the last BFS level processed.
    pub depth: u32,
    /// Number of cells dequeued and expanded.
    pub expansions: u64,
    parents: FxHashMap<CellKey, CellKey>,
}

impl TraversalOutcome {
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn was_visited(&self, c: Coord) -> bool {
        self.visited.contains(&CellKey::from_coord(c))
    }

    /// Walk parent links back from `target`.
    ///
    /// Returns `None` when `target` was not visited or parents were not recorded (except for
    /// the trivial `target == start` route).
    pub fn path_to(&self, target: Coord) -> Option<Vec<Coord>> {
        if !self.was_visited(target) {
            return None;
        }
        let start_key = CellKey::from_coord(self.start);
        let mut key = CellKey::from_coord(target);
        let mut path = vec![target];
        while key != start_key {
            key = *self.parents.get(&key)?;
            path.push(key.coord());
        }
        path.reverse();
        Some(path)
    }
}

/// Run one breadth-first traversal.
///
/// Neighbors are generated in the fixed order +x, -x, +y, -y and each is admitted at most once,
/// after a visited-membership check and an oracle check. The start cell is always admitted,
/// whatever the oracle says about it; callers decide whether that is meaningful.
///
/// Levels are drained one at a time, so the queue stays strictly FIFO and the level index is
/// the distance from `start`.
pub fn traverse<O, B>(
    oracle: &O,
    req: &Traversal,
    budget: &mut B,
) -> Result<TraversalOutcome, B::Error>
where
    O: SafetyOracle + ?Sized,
    B: Budget,
{
    let mut visited: FxHashSet<CellKey> = FxHashSet::default();
    budget.reserve_visited(STAGE, &mut visited, MIN_VISITED_GROWTH)?;
    let mut parents: FxHashMap<CellKey, CellKey> = FxHashMap::default();
    let mut queue: VecDeque<Coord> = VecDeque::new();

    visited.insert(CellKey::from_coord(req.start));
    budget.admit(STAGE, visited.len())?;
    queue.push_back(req.start);

    let mut depth: u32 = 0;
    let mut expansions: u64 = 0;
    let mut distance = None;

    'levels: loop {
        for _ in 0..queue.len() {
            let Some(cur) = queue.pop_front() else {
                break;
            };
            if req.target == Some(cur) {
                distance = Some(depth);
                break 'levels;
            }

            budget.expand(STAGE)?;
            expansions += 1;

            for step in ORTHOGONAL_STEPS {
                let Some(next) = cur.checked_step(step) else {
                    continue;
                };
                let key = CellKey::from_coord(next);
                if visited.contains(&key) || !oracle.is_safe(next) {
                    continue;
                }

                if visited.len() == visited.capacity() {
                    let growth = visited.len().max(MIN_VISITED_GROWTH);
                    budget.reserve_visited(STAGE, &mut visited, growth)?;
                }
                visited.insert(key);
                budget.admit(STAGE, visited.len())?;

                if req.record_parents {
                    parents.insert(key, CellKey::from_coord(cur));
                }
                queue.push_back(next);
            }
        }

        if queue.is_empty() {
            break;
        }
        depth += 1;
    }

    debug!(
        start = ?req.start,
        target = ?req.target,
        visited = visited.len(),
        depth,
        expansions,
        found = distance.is_some(),
        "bfs finished"
    );

    Ok(TraversalOutcome {
        start: req.start,
        visited,
        distance,
        depth,
        expansions,
        parents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::resources::Unlimited;

    /// A 3-wide corridor along x in `[0, len)`.
    struct Corridor {
        len: i32,
    }

    impl SafetyOracle for Corridor {
        fn is_safe(&self, c: Coord) -> bool {
            c.x >= 0 && c.x < self.len && c.y.abs() <= 1
        }
    }

    fn run(oracle: &Corridor, req: Traversal) -> TraversalOutcome {
        traverse(oracle, &req, &mut Unlimited).unwrap_or_else(|never| match never {})
    }

    #[test]
    fn exhaustive_run_reports_eccentricity() {
        let out = run(&Corridor { len: 5 }, Traversal::exhaustive(Coord::ORIGIN));
        assert_eq!(out.visited_count(), 15);
        // Farthest cells are (4, +-1).
        assert_eq!(out.depth, 5);
        assert_eq!(out.expansions, 15);
        assert_eq!(out.distance, None);
    }

    #[test]
    fn target_stops_the_search_early() {
        let oracle = Corridor { len: 50 };
        let out = run(
            &oracle,
            Traversal::towards(Coord::ORIGIN, Coord::new(3, 1)).with_parents(),
        );
        assert_eq!(out.distance, Some(4));
        assert!(out.visited_count() < 150);

        let path = out.path_to(Coord::new(3, 1)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Coord::ORIGIN);
        assert!(path.windows(2).all(|w| w[0].is_orthogonal_neighbor(w[1])));
    }

    #[test]
    fn path_needs_recorded_parents() {
        let out = run(
            &Corridor { len: 5 },
            Traversal::towards(Coord::ORIGIN, Coord::new(2, 0)),
        );
        assert_eq!(out.distance, Some(2));
        assert_eq!(out.path_to(Coord::new(2, 0)), None);
        assert_eq!(out.path_to(Coord::ORIGIN), Some(vec![Coord::ORIGIN]));
    }
}
