//! The safety rule: which cells a robot may stand on.

use crate::core::coord::Coord;
use crate::grid::bounds::GridBounds;

/// Default digit-sum threshold; a cell is safe when its digit sum is strictly below it.
pub const THRESHOLD: u32 = 19;

/// Sum of the decimal digits of `n` (`0` for `0`).
#[inline]
pub fn digit_sum(mut n: u64) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum
}

/// Cell classification consumed by the traversal engine.
///
/// Implementations must be pure: the same cell always gets the same answer. Anything that
/// should be unreachable (including out-of-bounds cells) must answer `false`.
pub trait SafetyOracle {
    fn is_safe(&self, c: Coord) -> bool;
}

impl<O: SafetyOracle + ?Sized> SafetyOracle for &O {
    #[inline]
    fn is_safe(&self, c: Coord) -> bool {
        (**self).is_safe(c)
    }
}

/// In bounds, and the digit sum of `|x * y|` is below `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSumRule {
    pub bounds: GridBounds,
    pub threshold: u32,
}

impl DigitSumRule {
    pub const fn new(bounds: GridBounds, threshold: u32) -> Self {
        Self { bounds, threshold }
    }

    #[inline]
    pub fn is_safe_xy(&self, x: i32, y: i32) -> bool {
        if !self.bounds.contains_xy(x, y) {
            return false;
        }
        // i64 holds any i32 product.
        let product = i64::from(x) * i64::from(y);
        digit_sum(product.unsigned_abs()) < self.threshold
    }
}

impl Default for DigitSumRule {
    fn default() -> Self {
        Self::new(GridBounds::default(), THRESHOLD)
    }
}

impl SafetyOracle for DigitSumRule {
    #[inline]
    fn is_safe(&self, c: Coord) -> bool {
        self.is_safe_xy(c.x, c.y)
    }
}

/// Safety of `(x, y)` on the default grid (`[-999, 999]`, threshold 19).
#[inline]
pub fn is_safe(x: i32, y: i32) -> bool {
    DigitSumRule::default().is_safe_xy(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(12), 3);
        assert_eq!(digit_sum(9801), 18);
        assert_eq!(digit_sum(56088), 27);
        assert_eq!(digit_sum(998001), 27);
        assert_eq!(digit_sum(u64::MAX), 87);
    }

    #[test]
    fn threshold_is_strict() {
        // 99 * 99 = 9801 -> 18
        let rule = DigitSumRule::new(GridBounds::default(), 18);
        assert!(!rule.is_safe_xy(99, 99));
        let rule = DigitSumRule::new(GridBounds::default(), 19);
        assert!(rule.is_safe_xy(99, 99));
    }

    #[test]
    fn wide_bounds_do_not_overflow() {
        let rule = DigitSumRule::new(GridBounds::new(i32::MIN, i32::MAX), THRESHOLD);
        // |i32::MIN * i32::MIN| = 2^62 = 4611686018427387904 -> 85
        assert!(!rule.is_safe_xy(i32::MIN, i32::MIN));
        assert!(rule.is_safe_xy(i32::MIN, 0));
    }
}
