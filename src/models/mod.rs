//! Core data models for the Weekly Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod record;
mod statement;
mod worker;

pub use record::PayrollRecord;
pub use statement::{DayPay, PayTotals, PayrollStatement, StatementDisplay, WorkerPay};
pub use worker::{WeekHours, Weekday, Worker};
