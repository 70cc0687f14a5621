//! Worker model and related types.
//!
//! This module defines the Weekday enum, the per-weekday hours log, and the
//! Worker struct for representing household workers in the payroll system.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// A weekday in the fixed Monday..Friday pay week.
///
/// The pay week covers weekdays only; there is no weekend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
}

impl Weekday {
    /// All weekdays in canonical order, Monday through Friday.
    ///
    /// Every hours summation in the engine iterates this array, so results
    /// are reproducible regardless of how a record was built up.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Returns the lowercase key used in serialized records and URLs.
    pub fn as_key(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        };
        f.write_str(name)
    }
}

impl FromStr for Weekday {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            other => Err(PayrollError::UnknownWeekday {
                value: other.to_string(),
            }),
        }
    }
}

/// Hours worked on each weekday of the pay week.
///
/// One field per weekday, so every day is always present in a record;
/// an unworked day is simply zero.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{WeekHours, Weekday};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut hours = WeekHours::default();
/// hours.set(Weekday::Monday, Decimal::from_str("8.5").unwrap());
/// assert_eq!(hours.get(Weekday::Monday), Decimal::from_str("8.5").unwrap());
/// assert_eq!(hours.get(Weekday::Tuesday), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekHours {
    /// Hours worked on Monday.
    pub monday: Decimal,
    /// Hours worked on Tuesday.
    pub tuesday: Decimal,
    /// Hours worked on Wednesday.
    pub wednesday: Decimal,
    /// Hours worked on Thursday.
    pub thursday: Decimal,
    /// Hours worked on Friday.
    pub friday: Decimal,
}

impl WeekHours {
    /// Returns the hours entered for the given weekday.
    pub fn get(&self, day: Weekday) -> Decimal {
        match day {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
        }
    }

    /// Replaces the hours for the given weekday, leaving the other days
    /// untouched.
    pub fn set(&mut self, day: Weekday, hours: Decimal) {
        match day {
            Weekday::Monday => self.monday = hours,
            Weekday::Tuesday => self.tuesday = hours,
            Weekday::Wednesday => self.wednesday = hours,
            Weekday::Thursday => self.thursday = hours,
            Weekday::Friday => self.friday = hours,
        }
    }

    /// Sums the week's hours in canonical Monday-through-Friday order.
    pub fn total(&self) -> Decimal {
        Weekday::ALL.iter().map(|&day| self.get(day)).sum()
    }
}

/// Represents a household worker on the payroll roster.
///
/// Values are taken as entered: a negative rate or an hours entry above 24
/// is accepted silently rather than rejected, since the tool serves a
/// single trusted user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Stable identifier for the worker (e.g., "tyler").
    pub key: String,
    /// Display name of the worker.
    pub name: String,
    /// The worker's hourly rate in currency units.
    pub rate: Decimal,
    /// Hours worked per weekday.
    pub hours: WeekHours,
}
