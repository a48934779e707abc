//! Breadth-first traversal over the implicit grid graph.
//!
//! Cells are nodes; two cells are joined when they are orthogonal neighbors and both are safe
//! under the [`SafetyOracle`](crate::grid::safety::SafetyOracle). All operations share the one
//! loop in [`bfs`]; [`reach`] and [`journey`] are thin entry points over it.

pub mod bfs;
pub mod journey;
pub mod reach;
pub mod resources;

use thiserror::Error;

use crate::search::resources::ResourceCounts;

#[derive(Debug, Error)]
/// Errors from bounded traversals. Unbounded traversals cannot fail.
pub enum SearchError {
    /// A configured resource limit was exceeded.
    #[error(
        "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
         counts(visited={}, expansions={})",
        .counts.visited,
        .counts.expansions
    )]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// A `try_reserve` allocation failed for the visited set.
    #[error(
        "allocation failed at {stage} for {structure}; counts(visited={}, expansions={})",
        .counts.visited,
        .counts.expansions
    )]
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },
}
