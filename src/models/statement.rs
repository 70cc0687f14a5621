//! Derived payroll totals and the statement view.
//!
//! This module contains the types produced by the payroll calculator.
//! Everything here is derived from a [`PayrollRecord`](super::PayrollRecord)
//! on demand and is never stored back into application state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayrollRecord, Weekday};

/// Derived pay for a single worker.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WorkerPay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = WorkerPay {
///     key: "tyler".to_string(),
///     name: "Tyler".to_string(),
///     total_hours: Decimal::from_str("37.25").unwrap(),
///     subtotal: Decimal::from_str("931.25").unwrap(),
/// };
/// assert_eq!(pay.subtotal, Decimal::from_str("931.25").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerPay {
    /// The worker's stable key.
    pub key: String,
    /// The worker's display name.
    pub name: String,
    /// Sum of the worker's hours, Monday through Friday.
    pub total_hours: Decimal,
    /// Pay for the week: `total_hours * rate`.
    pub subtotal: Decimal,
}

/// Combined labor pay for a single weekday across all workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPay {
    /// The weekday this amount applies to.
    pub day: Weekday,
    /// Sum of `hours * rate` over all workers for this day.
    pub amount: Decimal,
}

/// The full set of derived totals for a payroll record.
///
/// Always recomputed from the current record; no field of this struct is
/// ever cached across a record mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// Per-worker derived pay, in roster order.
    pub workers: Vec<WorkerPay>,
    /// Combined labor pay per weekday, Monday through Friday.
    pub day_totals: Vec<DayPay>,
    /// Combined hours across all workers.
    pub total_hours: Decimal,
    /// Sum of all worker subtotals, before reimbursements.
    pub labor_subtotal: Decimal,
    /// Transit reimbursement: `transit_swipes * SWIPE_RATE`.
    pub transit_amount: Decimal,
    /// The weekly grand total: `labor_subtotal + transit_amount`.
    pub grand_total: Decimal,
}

impl PayTotals {
    /// Returns the derived pay for the given worker key, if present.
    pub fn worker(&self, key: &str) -> Option<&WorkerPay> {
        self.workers.iter().find(|w| w.key == key)
    }
}

/// Display-formatted amounts for a statement.
///
/// These strings are produced by the currency formatter purely for display;
/// the numeric truth stays in [`PayTotals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementDisplay {
    /// Formatted labor subtotal.
    pub labor_subtotal: String,
    /// Formatted transit reimbursement.
    pub transit_amount: String,
    /// Formatted weekly grand total.
    pub grand_total: String,
}

/// A point-in-time view of the payroll: the record plus freshly computed
/// totals.
///
/// Statements are generated per request and discarded; they are the
/// response body of every API read and mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollStatement {
    /// Unique identifier for this statement.
    pub statement_id: Uuid,
    /// When the statement was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that generated the statement.
    pub engine_version: String,
    /// The payroll record the totals were derived from.
    pub record: PayrollRecord,
    /// Totals derived from the record.
    pub totals: PayTotals,
    /// Display-formatted headline amounts.
    pub display: StatementDisplay,
}
