//! `RobotGrid`: the public face of the crate.
//!
//! Bundles a [`DigitSumRule`] with the [`ResourceLimits`] used by the `try_*` operations. The
//! plain operations are total: they run unbounded and never fail.

use rustc_hash::FxHashSet;

use crate::core::coord::Coord;
use crate::grid::config::{ConfigError, GridConfig};
use crate::grid::safety::DigitSumRule;
use crate::search::journey::{journey_length, journey_path};
use crate::search::reach::{count_reachable, count_reachable_from_origin, reachable_set};
use crate::search::resources::{ResourceLimits, ResourceTracker, Unlimited};
use crate::search::SearchError;

/// Returned by [`RobotGrid::shortest_safe_journey`] for an unsafe endpoint or no path.
pub const NO_JOURNEY: i64 = -1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RobotGrid {
    rule: DigitSumRule,
    limits: ResourceLimits,
}

impl RobotGrid {
    /// The fixed grid: `[-999, 999]` on both axes, threshold 19.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rule: config.rule(),
            limits: config.limits,
        })
    }

    #[inline]
    pub fn rule(&self) -> &DigitSumRule {
        &self.rule
    }

    #[inline]
    pub fn limits(&self) -> ResourceLimits {
        self.limits
    }

    #[inline]
    pub fn is_safe(&self, x: i32, y: i32) -> bool {
        self.rule.is_safe_xy(x, y)
    }

    /// Number of safe cells reachable from the origin, the origin included.
    pub fn total_safe_squares(&self) -> usize {
        count_reachable_from_origin(&self.rule)
    }

    pub fn try_total_safe_squares(&self) -> Result<usize, SearchError> {
        let mut tracker = ResourceTracker::new(self.limits);
        count_reachable(&self.rule, Coord::ORIGIN, &mut tracker)
    }

    pub fn reachable_from_origin(&self) -> FxHashSet<Coord> {
        reachable_set(&self.rule, Coord::ORIGIN, &mut Unlimited)
            .unwrap_or_else(|never| match never {})
    }

    /// Shortest safe journey from `(a, b)` to `(x, y)`, or [`NO_JOURNEY`].
    pub fn shortest_safe_journey(&self, a: i32, b: i32, x: i32, y: i32) -> i64 {
        self.journey_length(Coord::new(a, b), Coord::new(x, y))
            .map_or(NO_JOURNEY, i64::from)
    }

    pub fn journey_length(&self, start: Coord, target: Coord) -> Option<u32> {
        journey_length(&self.rule, start, target, &mut Unlimited)
            .unwrap_or_else(|never| match never {})
    }

    pub fn try_journey_length(
        &self,
        start: Coord,
        target: Coord,
    ) -> Result<Option<u32>, SearchError> {
        let mut tracker = ResourceTracker::new(self.limits);
        journey_length(&self.rule, start, target, &mut tracker)
    }

    pub fn journey_path(&self, start: Coord, target: Coord) -> Option<Vec<Coord>> {
        journey_path(&self.rule, start, target, &mut Unlimited)
            .unwrap_or_else(|never| match never {})
    }
}
