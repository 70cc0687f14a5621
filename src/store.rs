//! The payroll state container.
//!
//! This module defines [`PayrollStore`], the single owner of the in-memory
//! payroll record. All mutations flow through it, each one replacing exactly
//! the field it names; totals are recomputed from the record on every read,
//! so a stale total is never observable after a mutation.

use rust_decimal::Decimal;

use crate::calculation::calculate_totals;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayTotals, PayrollRecord, Weekday};

/// Owns the payroll record for a session, along with the default dataset
/// that [`reset`](PayrollStore::reset) restores.
///
/// There is exactly one logical writer (the user-driven update path); the
/// store itself is synchronous and holds no derived state.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollRecord, WeekHours, Worker};
/// use payroll_engine::store::PayrollStore;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let defaults = PayrollRecord {
///     workers: vec![Worker {
///         key: "w1".to_string(),
///         name: "Worker".to_string(),
///         rate: Decimal::from_str("10").unwrap(),
///         hours: WeekHours::default(),
///     }],
///     transit_swipes: 0,
/// };
///
/// let mut store = PayrollStore::new(defaults);
/// store.set_transit_swipes(4);
/// assert_eq!(store.totals().transit_amount, Decimal::from_str("12").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PayrollStore {
    record: PayrollRecord,
    defaults: PayrollRecord,
}

impl PayrollStore {
    /// Creates a store whose current record starts as a copy of the given
    /// default dataset.
    pub fn new(defaults: PayrollRecord) -> Self {
        Self {
            record: defaults.clone(),
            defaults,
        }
    }

    /// Returns the current payroll record.
    pub fn record(&self) -> &PayrollRecord {
        &self.record
    }

    /// Returns the default dataset this store was created with.
    pub fn defaults(&self) -> &PayrollRecord {
        &self.defaults
    }

    /// Recomputes the totals from the current record.
    ///
    /// Nothing is cached: every call derives fresh totals, keeping them a
    /// pure function of the record at all times.
    pub fn totals(&self) -> PayTotals {
        calculate_totals(&self.record)
    }

    /// Replaces a worker's hourly rate, leaving every other field of the
    /// record untouched.
    pub fn set_rate(&mut self, key: &str, rate: Decimal) -> PayrollResult<()> {
        let worker = self
            .record
            .worker_mut(key)
            .ok_or_else(|| PayrollError::WorkerNotFound {
                key: key.to_string(),
            })?;
        worker.rate = rate;
        Ok(())
    }

    /// Replaces a single day's hours for a worker, leaving the other days
    /// and workers untouched.
    pub fn set_hours(&mut self, key: &str, day: Weekday, hours: Decimal) -> PayrollResult<()> {
        let worker = self
            .record
            .worker_mut(key)
            .ok_or_else(|| PayrollError::WorkerNotFound {
                key: key.to_string(),
            })?;
        worker.hours.set(day, hours);
        Ok(())
    }

    /// Replaces the transit swipe count.
    pub fn set_transit_swipes(&mut self, swipes: i64) {
        self.record.transit_swipes = swipes;
    }

    /// Restores the record to the default dataset, discarding every
    /// mutation made since the session began.
    ///
    /// Callers are expected to have obtained explicit user confirmation
    /// before invoking this.
    pub fn reset(&mut self) {
        self.record = self.defaults.clone();
    }
}
