//! Configuration loading and management for the Weekly Payroll Engine.
//!
//! This module provides functionality to load the household roster from a
//! YAML file: the household metadata and the default worker dataset that
//! every fresh session (and every reset) starts from.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/household").unwrap();
//! println!("Loaded roster for: {}", config.household().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HouseholdMetadata, RosterConfig, WorkerConfig};
