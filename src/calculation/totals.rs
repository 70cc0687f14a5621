//! The full totals aggregation.
//!
//! This module contains [`calculate_totals`], the payroll calculator: a
//! pure function mapping a payroll record to its derived totals.

use rust_decimal::Decimal;

use crate::models::{DayPay, PayTotals, PayrollRecord, Weekday};

use super::transit::calculate_transit_reimbursement;
use super::worker_pay::calculate_worker_pay;

/// Derives the complete set of totals from a payroll record.
///
/// For each worker: `total_hours = Σ hours[day]` over Monday..Friday and
/// `subtotal = total_hours * rate`. The transit reimbursement is
/// `transit_swipes * SWIPE_RATE`, and the grand total is the sum of all
/// worker subtotals plus the reimbursement. Per-day combined labor amounts
/// and the roster-wide hours total are derived alongside for display.
///
/// The function has no side effects and no failure modes; workers are
/// processed in roster order and days in Monday-through-Friday order, so
/// the output is deterministic for a given record.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_totals;
/// use payroll_engine::models::{PayrollRecord, WeekHours, Worker};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = PayrollRecord {
///     workers: vec![Worker {
///         key: "w1".to_string(),
///         name: "Worker".to_string(),
///         rate: Decimal::from_str("10").unwrap(),
///         hours: WeekHours::default(),
///     }],
///     transit_swipes: 2,
/// };
///
/// let totals = calculate_totals(&record);
/// assert_eq!(totals.grand_total, Decimal::from_str("6").unwrap());
/// ```
pub fn calculate_totals(record: &PayrollRecord) -> PayTotals {
    let workers: Vec<_> = record.workers.iter().map(calculate_worker_pay).collect();

    let day_totals: Vec<DayPay> = Weekday::ALL
        .iter()
        .map(|&day| DayPay {
            day,
            amount: record
                .workers
                .iter()
                .map(|w| w.hours.get(day) * w.rate)
                .sum(),
        })
        .collect();

    let total_hours: Decimal = workers.iter().map(|w| w.total_hours).sum();
    let labor_subtotal: Decimal = workers.iter().map(|w| w.subtotal).sum();
    let transit_amount = calculate_transit_reimbursement(record.transit_swipes);
    let grand_total = labor_subtotal + transit_amount;

    PayTotals {
        workers,
        day_totals,
        total_hours,
        labor_subtotal,
        transit_amount,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WeekHours, Worker};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_worker(key: &str, rate: &str, hours: [&str; 5]) -> Worker {
        Worker {
            key: key.to_string(),
            name: key.to_string(),
            rate: dec(rate),
            hours: WeekHours {
                monday: dec(hours[0]),
                tuesday: dec(hours[1]),
                wednesday: dec(hours[2]),
                thursday: dec(hours[3]),
                friday: dec(hours[4]),
            },
        }
    }

    fn default_record() -> PayrollRecord {
        PayrollRecord {
            workers: vec![
                create_worker("tyler", "25", ["8.5", "8.5", "8.5", "8.5", "3.25"]),
                create_worker("elle", "5", ["2", "2", "2", "2", "2"]),
            ],
            transit_swipes: 0,
        }
    }

    /// TO-001: the worked example from the default household week
    #[test]
    fn test_default_week_with_four_swipes() {
        let mut record = default_record();
        record.transit_swipes = 4;

        let totals = calculate_totals(&record);

        assert_eq!(totals.worker("tyler").unwrap().total_hours, dec("37.25"));
        assert_eq!(totals.worker("tyler").unwrap().subtotal, dec("931.25"));
        assert_eq!(totals.worker("elle").unwrap().total_hours, dec("10"));
        assert_eq!(totals.worker("elle").unwrap().subtotal, dec("50"));
        assert_eq!(totals.transit_amount, dec("12"));
        assert_eq!(totals.grand_total, dec("993.25"));
    }

    /// TO-002: default week without swipes
    #[test]
    fn test_default_week_without_swipes() {
        let totals = calculate_totals(&default_record());

        assert_eq!(totals.labor_subtotal, dec("981.25"));
        assert_eq!(totals.transit_amount, Decimal::ZERO);
        assert_eq!(totals.grand_total, dec("981.25"));
        assert_eq!(totals.total_hours, dec("47.25"));
    }

    /// TO-003: per-day combined labor amounts
    #[test]
    fn test_day_totals() {
        let totals = calculate_totals(&default_record());

        assert_eq!(totals.day_totals.len(), 5);
        assert_eq!(totals.day_totals[0].day, Weekday::Monday);
        // Monday: 8.5 * 25 + 2 * 5
        assert_eq!(totals.day_totals[0].amount, dec("222.5"));
        // Friday: 3.25 * 25 + 2 * 5
        assert_eq!(totals.day_totals[4].day, Weekday::Friday);
        assert_eq!(totals.day_totals[4].amount, dec("91.25"));
    }

    /// TO-004: empty roster still totals the reimbursement
    #[test]
    fn test_empty_roster() {
        let record = PayrollRecord {
            workers: vec![],
            transit_swipes: 2,
        };

        let totals = calculate_totals(&record);

        assert!(totals.workers.is_empty());
        assert_eq!(totals.labor_subtotal, Decimal::ZERO);
        assert_eq!(totals.grand_total, dec("6"));
    }

    #[test]
    fn test_totals_are_pure_and_repeatable() {
        let record = default_record();
        assert_eq!(calculate_totals(&record), calculate_totals(&record));
    }

    #[test]
    fn test_workers_reported_in_roster_order() {
        let totals = calculate_totals(&default_record());
        let keys: Vec<&str> = totals.workers.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(keys, vec!["tyler", "elle"]);
    }

    #[test]
    fn test_negative_swipes_reduce_grand_total() {
        let mut record = default_record();
        record.transit_swipes = -1;

        let totals = calculate_totals(&record);

        assert_eq!(totals.transit_amount, dec("-3"));
        assert_eq!(totals.grand_total, dec("978.25"));
    }

    // Strategies model the form's entry granularity: cents for rates,
    // hundredths of an hour for hours.
    fn decimal_cents(max: i64) -> impl Strategy<Value = Decimal> {
        (0..=max).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        /// Total hours are the plain sum of the five daily entries, and the
        /// subtotal is that sum times the rate.
        #[test]
        fn prop_worker_hours_and_subtotal(
            rate_cents in 0i64..=20_000,
            hours_cents in prop::array::uniform5(0i64..=2_400),
        ) {
            let rate = Decimal::new(rate_cents, 2);
            let hours: Vec<Decimal> =
                hours_cents.iter().map(|&c| Decimal::new(c, 2)).collect();

            let worker = Worker {
                key: "w1".to_string(),
                name: "Worker".to_string(),
                rate,
                hours: WeekHours {
                    monday: hours[0],
                    tuesday: hours[1],
                    wednesday: hours[2],
                    thursday: hours[3],
                    friday: hours[4],
                },
            };

            let pay = calculate_worker_pay(&worker);
            let expected_hours: Decimal = hours.iter().copied().sum();

            prop_assert_eq!(pay.total_hours, expected_hours);
            prop_assert_eq!(pay.subtotal, expected_hours * rate);
        }

        /// The grand total is the sum of both worker subtotals plus three
        /// currency units per swipe.
        #[test]
        fn prop_grand_total_decomposition(
            rate_a in decimal_cents(20_000),
            rate_b in decimal_cents(20_000),
            hours_a in prop::array::uniform5(0i64..=2_400),
            hours_b in prop::array::uniform5(0i64..=2_400),
            swipes in 0i64..=100,
        ) {
            let make_hours = |cents: &[i64; 5]| WeekHours {
                monday: Decimal::new(cents[0], 2),
                tuesday: Decimal::new(cents[1], 2),
                wednesday: Decimal::new(cents[2], 2),
                thursday: Decimal::new(cents[3], 2),
                friday: Decimal::new(cents[4], 2),
            };

            let record = PayrollRecord {
                workers: vec![
                    Worker {
                        key: "a".to_string(),
                        name: "A".to_string(),
                        rate: rate_a,
                        hours: make_hours(&hours_a),
                    },
                    Worker {
                        key: "b".to_string(),
                        name: "B".to_string(),
                        rate: rate_b,
                        hours: make_hours(&hours_b),
                    },
                ],
                transit_swipes: swipes,
            };

            let totals = calculate_totals(&record);
            let subtotal_a = totals.worker("a").unwrap().subtotal;
            let subtotal_b = totals.worker("b").unwrap().subtotal;

            prop_assert_eq!(
                totals.grand_total,
                subtotal_a + subtotal_b + Decimal::from(swipes) * dec("3")
            );
            prop_assert_eq!(totals.labor_subtotal, subtotal_a + subtotal_b);
        }
    }
}
