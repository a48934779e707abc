use rustc_hash::FxHashSet;

use crate::core::coord::Coord;
use crate::grid::safety::SafetyOracle;
use crate::search::bfs::{traverse, Traversal};
use crate::search::resources::{Budget, Unlimited};

/// Number of cells reachable from `root`, `root` included.
///
/// `root` is counted even if the oracle rejects it.
pub fn count_reachable<O, B>(oracle: &O, root: Coord, budget: &mut B) -> Result<usize, B::Error>
where
    O: SafetyOracle + ?Sized,
    B: Budget,
{
    let out = traverse(oracle, &Traversal::exhaustive(root), budget)?;
    Ok(out.visited_count())
}

/// The full reachable set from `root`, `root` included.
pub fn reachable_set<O, B>(
    oracle: &O,
    root: Coord,
    budget: &mut B,
) -> Result<FxHashSet<Coord>, B::Error>
where
    O: SafetyOracle + ?Sized,
    B: Budget,
{
    let out = traverse(oracle, &Traversal::exhaustive(root), budget)?;
    Ok(out.visited.iter().map(|k| k.coord()).collect())
}

/// Unbounded [`count_reachable`] from the origin.
pub fn count_reachable_from_origin<O: SafetyOracle + ?Sized>(oracle: &O) -> usize {
    count_reachable(oracle, Coord::ORIGIN, &mut Unlimited)
        .unwrap_or_else(|never| match never {})
}
