//! Currency display formatting.
//!
//! This module renders monetary amounts for display: two fixed decimal
//! places with comma-grouped thousands. The formatter is invoked only when
//! building display strings; computed totals always stay in their exact
//! decimal form.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary amount with two decimal places and grouped thousands.
///
/// Midpoints round away from zero, matching how amounts read on a printed
/// pay summary. Negative amounts carry a leading minus sign.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("993.25").unwrap();
/// assert_eq!(format_currency(amount), "993.25");
///
/// let amount = Decimal::from_str("1234.5").unwrap();
/// assert_eq!(format_currency(amount), "1,234.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    };

    let mut frac = frac_part;
    frac.truncate(2);
    while frac.len() < 2 {
        frac.push('0');
    }

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac)
}
