//! Transit reimbursement calculation.
//!
//! This module provides the flat-rate reimbursement for transit swipes
//! recorded on the weekly payroll.

use rust_decimal::Decimal;

/// Reimbursement per transit swipe, in currency units.
///
/// A flat rate of 3 per swipe; the count is multiplied by this constant and
/// added to the weekly grand total.
pub const SWIPE_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Calculates the transit reimbursement for a swipe count.
///
/// The reimbursement is simply `swipes * SWIPE_RATE`. Negative counts are
/// accepted and produce a negative reimbursement; the engine does not
/// second-guess entered values.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_transit_reimbursement;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = calculate_transit_reimbursement(4);
/// assert_eq!(amount, Decimal::from_str("12").unwrap());
/// ```
pub fn calculate_transit_reimbursement(swipes: i64) -> Decimal {
    Decimal::from(swipes) * SWIPE_RATE
}
