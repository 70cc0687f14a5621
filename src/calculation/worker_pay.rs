//! Per-worker pay calculation.
//!
//! This module derives a single worker's weekly hours and pay from their
//! entered rate and per-weekday hours.

use crate::models::{Weekday, Worker, WorkerPay};

/// Calculates a worker's weekly hours and pay.
///
/// Hours are summed in the canonical Monday-through-Friday order
/// ([`Weekday::ALL`]) and the subtotal is `total_hours * rate`. The
/// function is pure and total: any well-formed worker record produces a
/// result, including records with negative rates or implausible hours.
///
/// # Arguments
///
/// * `worker` - The worker to derive pay for
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_worker_pay;
/// use payroll_engine::models::{WeekHours, Worker};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let worker = Worker {
///     key: "tyler".to_string(),
///     name: "Tyler".to_string(),
///     rate: Decimal::from_str("25").unwrap(),
///     hours: WeekHours {
///         monday: Decimal::from_str("8.5").unwrap(),
///         tuesday: Decimal::from_str("8.5").unwrap(),
///         wednesday: Decimal::from_str("8.5").unwrap(),
///         thursday: Decimal::from_str("8.5").unwrap(),
///         friday: Decimal::from_str("3.25").unwrap(),
///     },
/// };
///
/// let pay = calculate_worker_pay(&worker);
/// assert_eq!(pay.total_hours, Decimal::from_str("37.25").unwrap());
/// assert_eq!(pay.subtotal, Decimal::from_str("931.25").unwrap());
/// ```
pub fn calculate_worker_pay(worker: &Worker) -> WorkerPay {
    // Fixed summation order keeps output reproducible for any record.
    let total_hours = Weekday::ALL
        .iter()
        .map(|&day| worker.hours.get(day))
        .sum();
    let subtotal = total_hours * worker.rate;

    WorkerPay {
        key: worker.key.clone(),
        name: worker.name.clone(),
        total_hours,
        subtotal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeekHours;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_worker(rate: &str, hours: [&str; 5]) -> Worker {
        Worker {
            key: "w1".to_string(),
            name: "Worker".to_string(),
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

    /// WP-001: the first default worker from the household roster
    #[test]
    fn test_default_first_worker_week() {
        let worker = create_worker("25", ["8.5", "8.5", "8.5", "8.5", "3.25"]);

        let pay = calculate_worker_pay(&worker);

        assert_eq!(pay.total_hours, dec("37.25"));
        assert_eq!(pay.subtotal, dec("931.25"));
    }

    /// WP-002: the second default worker from the household roster
    #[test]
    fn test_default_second_worker_week() {
        let worker = create_worker("5", ["2", "2", "2", "2", "2"]);

        let pay = calculate_worker_pay(&worker);

        assert_eq!(pay.total_hours, dec("10"));
        assert_eq!(pay.subtotal, dec("50"));
    }

    /// WP-003: all-zero hours pay nothing at any rate
    #[test]
    fn test_zero_hours_zero_pay() {
        let worker = create_worker("42.75", ["0", "0", "0", "0", "0"]);

        let pay = calculate_worker_pay(&worker);

        assert_eq!(pay.total_hours, Decimal::ZERO);
        assert_eq!(pay.subtotal, Decimal::ZERO);
    }

    /// WP-004: zero rate pays nothing for any hours
    #[test]
    fn test_zero_rate_zero_pay() {
        let worker = create_worker("0", ["8", "8", "8", "8", "8"]);

        let pay = calculate_worker_pay(&worker);

        assert_eq!(pay.total_hours, dec("40"));
        assert_eq!(pay.subtotal, Decimal::ZERO);
    }

    /// WP-005: nonsensical entries flow through unchanged
    #[test]
    fn test_negative_rate_and_oversized_hours_flow_through() {
        let worker = create_worker("-5", ["30", "0", "0", "0", "0"]);

        let pay = calculate_worker_pay(&worker);

        assert_eq!(pay.total_hours, dec("30"));
        assert_eq!(pay.subtotal, dec("-150"));
    }

    #[test]
    fn test_result_carries_worker_identity() {
        let worker = create_worker("10", ["1", "1", "1", "1", "1"]);

        let pay = calculate_worker_pay(&worker);

        assert_eq!(pay.key, worker.key);
        assert_eq!(pay.name, worker.name);
    }

    #[test]
    fn test_quarter_hour_entries() {
        let worker = create_worker("20", ["7.25", "7.75", "8", "6.5", "4.25"]);

        let pay = calculate_worker_pay(&worker);

        assert_eq!(pay.total_hours, dec("33.75"));
        assert_eq!(pay.subtotal, dec("675"));
    }
}
