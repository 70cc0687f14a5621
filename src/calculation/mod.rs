//! Calculation logic for the Weekly Payroll Engine.
//!
//! This module contains the pure calculation functions for deriving totals
//! from a payroll record: per-worker hours and pay, the flat-rate transit
//! reimbursement, the full totals aggregation, and the input coercion rule
//! applied to raw text entry before it reaches the calculator.

mod coerce;
mod totals;
mod transit;
mod worker_pay;

pub use coerce::{coerce_count, coerce_decimal};
pub use totals::calculate_totals;
pub use transit::{calculate_transit_reimbursement, SWIPE_RATE};
pub use worker_pay::calculate_worker_pay;
