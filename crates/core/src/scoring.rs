//! Scoring module - doubling row-clear points
//!
//! A sweep pays [`ROW_BASE_POINTS`] for the first row it clears and twice the
//! previous amount for every further row cleared in the same sweep:
//!
//! | Rows in one sweep | Points |
//! |-------------------|--------|
//! | 1 | 10 |
//! | 2 | 10 + 20 = 30 |
//! | 3 | 10 + 20 + 40 = 70 |
//! | 4 | 10 + 20 + 40 + 80 = 150 |
//!
//! The multiplier restarts at 1 on every sweep call.

use crate::types::ROW_BASE_POINTS;

/// Outcome of one sweep call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepResult {
    /// Number of full rows removed
    pub rows: u32,
    /// Points earned by those rows
    pub points: u32,
}

impl SweepResult {
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

/// Points for the `nth` row (0-based) cleared within a single sweep.
pub fn row_points(nth: u32) -> u32 {
    let multiplier = 1u32.checked_shl(nth).unwrap_or(u32::MAX);
    ROW_BASE_POINTS.saturating_mul(multiplier)
}

/// Total points for clearing `rows` rows in one sweep.
pub fn sweep_points(rows: u32) -> u32 {
    (0..rows).fold(0u32, |acc, nth| acc.saturating_add(row_points(nth)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_points_double() {
        assert_eq!(row_points(0), 10);
        assert_eq!(row_points(1), 20);
        assert_eq!(row_points(2), 40);
        assert_eq!(row_points(3), 80);
    }

    #[test]
    fn test_sweep_points_table() {
        assert_eq!(sweep_points(0), 0);
        assert_eq!(sweep_points(1), 10);
        assert_eq!(sweep_points(2), 30);
        assert_eq!(sweep_points(3), 70);
        assert_eq!(sweep_points(4), 150);
    }

    #[test]
    fn test_row_points_saturate() {
        assert_eq!(row_points(40), u32::MAX);
        assert_eq!(sweep_points(64), u32::MAX);
    }
}
