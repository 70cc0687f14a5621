//! Input coercion for raw text entry.
//!
//! Rates, hours, and the swipe count arrive as raw text from input fields.
//! The engine applies a single normalization rule: empty or non-numeric
//! text becomes zero. Nothing is rejected and no validation error is ever
//! surfaced; this tool serves one trusted user, and silently zeroing a bad
//! entry is the intended behavior, not an oversight.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Coerces a raw text entry to a decimal value.
///
/// Whitespace is trimmed; empty or unparseable text yields zero. Values
/// that parse are taken as-is, including negatives and implausibly large
/// hours.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::coerce_decimal;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(coerce_decimal("8.5"), Decimal::from_str("8.5").unwrap());
/// assert_eq!(coerce_decimal(""), Decimal::ZERO);
/// assert_eq!(coerce_decimal("abc"), Decimal::ZERO);
/// ```
pub fn coerce_decimal(input: &str) -> Decimal {
    Decimal::from_str(input.trim()).unwrap_or(Decimal::ZERO)
}

/// Coerces a raw text entry to an integer count.
///
/// Integer text is taken directly; decimal text truncates toward zero
/// ("4.7" counts as 4 swipes); empty or unparseable text yields zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::coerce_count;
///
/// assert_eq!(coerce_count("4"), 4);
/// assert_eq!(coerce_count("4.7"), 4);
/// assert_eq!(coerce_count(""), 0);
/// assert_eq!(coerce_count("swipes"), 0);
/// ```
pub fn coerce_count(input: &str) -> i64 {
    let trimmed = input.trim();
    if let Ok(count) = trimmed.parse::<i64>() {
        return count;
    }
    Decimal::from_str(trimmed)
        .ok()
        .and_then(|d| d.trunc().to_i64())
        .unwrap_or(0)
}
