//! Configuration types for the household roster.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML roster file. The roster defines the default dataset that a
//! fresh session starts from and that a reset restores.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::WeekHours;

/// Metadata about the household this roster belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct HouseholdMetadata {
    /// The display name of the household.
    pub name: String,
    /// Free-form note about the pay arrangement.
    #[serde(default)]
    pub note: String,
}

/// A worker entry in the roster file.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    /// Stable identifier for the worker (e.g., "tyler").
    pub key: String,
    /// Display name of the worker.
    pub name: String,
    /// Default hourly rate in currency units.
    pub rate: Decimal,
    /// Default hours per weekday for a typical week.
    pub hours: WeekHours,
}

/// The complete roster configuration loaded from `roster.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Household metadata.
    pub household: HouseholdMetadata,
    /// The workers on the roster, in roster order.
    pub workers: Vec<WorkerConfig>,
    /// Default transit swipe count for a fresh week.
    #[serde(default)]
    pub transit_swipes: i64,
}
