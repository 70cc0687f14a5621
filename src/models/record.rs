//! The payroll record.
//!
//! This module defines [`PayrollRecord`], the single in-memory record that
//! every calculation is derived from. The record is owned exclusively by the
//! application state container and lives only for the session.

use serde::{Deserialize, Serialize};

use super::Worker;

/// The complete weekly payroll record.
///
/// Workers form an ordered sequence keyed by stable identifier; the same
/// aggregation is applied to each of them, however many the roster defines.
/// The transit swipe count is kept as entered, including nonsensical values
/// such as negative counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The workers on the roster, in roster order.
    pub workers: Vec<Worker>,
    /// Number of reimbursable transit swipes this week.
    pub transit_swipes: i64,
}

impl PayrollRecord {
    /// Looks up a worker by its stable key.
    pub fn worker(&self, key: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.key == key)
    }

    /// Looks up a worker by its stable key for mutation.
    pub fn worker_mut(&mut self, key: &str) -> Option<&mut Worker> {
        self.workers.iter_mut().find(|w| w.key == key)
    }
}
