//! Shortest safe journeys between two cells.
//!
//! Both endpoints are checked against the oracle first (which also enforces bounds); an unsafe
//! endpoint is answered with `None` without traversing. Equal endpoints are answered with a
//! zero-length journey, also without traversing.

use crate::core::coord::Coord;
use crate::grid::safety::SafetyOracle;
use crate::search::bfs::{traverse, Traversal};
use crate::search::resources::Budget;

#[inline]
fn endpoints_safe<O: SafetyOracle + ?Sized>(oracle: &O, start: Coord, target: Coord) -> bool {
    oracle.is_safe(start) && oracle.is_safe(target)
}

/// Minimum number of orthogonal moves from `start` to `target` through safe cells.
///
/// `None` if either endpoint is unsafe or the target is not reachable.
pub fn journey_length<O, B>(
    oracle: &O,
    start: Coord,
    target: Coord,
    budget: &mut B,
) -> Result<Option<u32>, B::Error>
where
    O: SafetyOracle + ?Sized,
    B: Budget,
{
    if !endpoints_safe(oracle, start, target) {
        return Ok(None);
    }
    if start == target {
        return Ok(Some(0));
    }
    let out = traverse(oracle, &Traversal::towards(start, target), budget)?;
    Ok(out.distance)
}

/// One shortest route from `start` to `target`, both inclusive.
///
/// Ties between equal-length routes are broken by the +x, -x, +y, -y expansion order.
pub fn journey_path<O, B>(
    oracle: &O,
    start: Coord,
    target: Coord,
    budget: &mut B,
) -> Result<Option<Vec<Coord>>, B::Error>
where
    O: SafetyOracle + ?Sized,
    B: Budget,
{
    if !endpoints_safe(oracle, start, target) {
        return Ok(None);
    }
    if start == target {
        return Ok(Some(vec![start]));
    }
    let out = traverse(
        oracle,
        &Traversal::towards(start, target).with_parents(),
        budget,
    )?;
    if out.distance.is_none() {
        return Ok(None);
    }
    Ok(out.path_to(target))
}
