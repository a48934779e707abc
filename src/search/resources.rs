//! Budgets for traversals.
//!
//! Every traversal threads a [`Budget`] through its inner loop:
//! - [`Unlimited`] never fails (its error type is [`Infallible`]); the bounded default grid
//!   guarantees termination on its own.
//! - [`ResourceTracker`] enforces [`ResourceLimits`] and surfaces `try_reserve` failures, for
//!   configured grids large enough that the visited set may not fit in memory.

use std::convert::Infallible;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::cell_key::CellKey;
use crate::search::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Traversal caps.
///
/// - `max_visited`: cells admitted to the visited set of a single call
/// - `max_expansions`: cells dequeued and expanded by a single call
pub struct ResourceLimits {
    pub max_visited: usize,
    pub max_expansions: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        // Covers every cell of the default 1999 x 1999 grid.
        Self {
            max_visited: 4_000_000,
            max_expansions: 4_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Running counters for a single traversal.
pub struct ResourceCounts {
    pub visited: u64,
    pub expansions: u64,
}

/// Accounting hooks called by the traversal loop.
pub trait Budget {
    type Error;

    /// Called after a cell enters the visited set; `visited` is the new set size.
    fn admit(&mut self, stage: &'static str, visited: usize) -> Result<(), Self::Error>;

    /// Called once per dequeued cell, before its neighbors are generated.
    fn expand(&mut self, stage: &'static str) -> Result<(), Self::Error>;

    /// Grow the visited set by at least `additional` slots.
    fn reserve_visited(
        &mut self,
        stage: &'static str,
        set: &mut FxHashSet<CellKey>,
        additional: usize,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl Budget for Unlimited {
    type Error = Infallible;

    #[inline]
    fn admit(&mut self, _stage: &'static str, _visited: usize) -> Result<(), Infallible> {
        Ok(())
    }

    #[inline]
    fn expand(&mut self, _stage: &'static str) -> Result<(), Infallible> {
        Ok(())
    }

    fn reserve_visited(
        &mut self,
        _stage: &'static str,
        set: &mut FxHashSet<CellKey>,
        additional: usize,
    ) -> Result<(), Infallible> {
        set.reserve(additional);
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Tracks counters against [`ResourceLimits`].
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    fn check(
        &self,
        stage: &'static str,
        metric: &'static str,
        observed: u64,
        limit: u64,
    ) -> Result<(), SearchError> {
        if observed > limit {
            warn!(stage, metric, limit, observed, "traversal limit exceeded");
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }
        Ok(())
    }
}

impl Budget for ResourceTracker {
    type Error = SearchError;

    #[inline]
    fn admit(&mut self, stage: &'static str, visited: usize) -> Result<(), SearchError> {
        self.counts.visited = visited as u64;
        self.check(
            stage,
            "visited",
            self.counts.visited,
            self.limits.max_visited as u64,
        )
    }

    #[inline]
    fn expand(&mut self, stage: &'static str) -> Result<(), SearchError> {
        self.counts.expansions = self.counts.expansions.saturating_add(1);
        self.check(
            stage,
            "expansions",
            self.counts.expansions,
            self.limits.max_expansions,
        )
    }

    fn reserve_visited(
        &mut self,
        stage: &'static str,
        set: &mut FxHashSet<CellKey>,
        additional: usize,
    ) -> Result<(), SearchError> {
        // Never reserve past the cap; the cap itself is reported by `admit`.
        let headroom = self.limits.max_visited.saturating_sub(set.len()).max(1);
        set.try_reserve(additional.min(headroom))
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure: "visited",
                counts: self.counts,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_trips_one_past_the_limit() {
        let mut t = ResourceTracker::new(ResourceLimits {
            max_visited: 2,
            max_expansions: 1,
        });
        assert!(t.admit("test", 1).is_ok());
        assert!(t.admit("test", 2).is_ok());
        let err = t.admit("test", 3).unwrap_err();
        assert!(matches!(
            err,
            SearchError::LimitExceeded {
                metric: "visited",
                limit: 2,
                observed: 3,
                ..
            }
        ));

        assert!(t.expand("test").is_ok());
        assert!(matches!(
            t.expand("test"),
            Err(SearchError::LimitExceeded {
                metric: "expansions",
                ..
            })
        ));
        assert_eq!(t.counts().expansions, 2);
    }
}
