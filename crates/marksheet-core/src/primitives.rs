//! # Primitives
//!
//! Fixed bounds shared by the validator, the grade calculator and the form.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Number of subject marks on every record.
pub const MARK_COUNT: usize = 5;

/// Highest mark a single subject can carry.
pub const MAX_MARK: Decimal = dec!(100);

/// Maximum possible total across all subjects.
pub const MAX_TOTAL: Decimal = dec!(500);

/// Decimal places a percentage is rounded to.
pub const PERCENTAGE_SCALE: u32 = 2;

/// Youngest accepted age (inclusive).
pub const MIN_AGE: u8 = 1;

/// Oldest accepted age (inclusive).
pub const MAX_AGE: u8 = 100;

// =============================================================================
// DIVISION THRESHOLDS (percent)
// =============================================================================

/// 60% and above is a first division.
pub const FIRST_DIVISION_MIN: Decimal = dec!(60);

/// 45% and above is a second division.
pub const SECOND_DIVISION_MIN: Decimal = dec!(45);

/// 33% and above is a third division. Anything lower fails.
pub const THIRD_DIVISION_MIN: Decimal = dec!(33);
