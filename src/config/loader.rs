//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the household
//! roster from a YAML file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayrollRecord, Worker};

use super::types::RosterConfig;

/// Loads and provides access to the household roster configuration.
///
/// The `ConfigLoader` reads the roster YAML from a directory and builds the
/// default payroll record that a fresh session starts from.
///
/// # Directory Structure
///
/// ```text
/// config/household/
/// └── roster.yaml   # Household metadata and default worker roster
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/household").unwrap();
/// println!("Loaded roster for: {}", loader.household().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    roster: RosterConfig,
}

impl ConfigLoader {
    /// Loads the roster configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/household")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The roster file is missing
    /// - The file contains invalid YAML
    /// - The roster is empty or contains duplicate worker keys
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/household")?;
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let roster_path = path.as_ref().join("roster.yaml");
        let roster = Self::load_yaml::<RosterConfig>(&roster_path)?;
        Self::validate(&roster)?;

        Ok(Self { roster })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks the roster for structural problems the type system cannot
    /// catch: an empty roster or colliding worker keys.
    fn validate(roster: &RosterConfig) -> PayrollResult<()> {
        if roster.workers.is_empty() {
            return Err(PayrollError::InvalidRoster {
                message: "roster contains no workers".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for worker in &roster.workers {
            if !seen.insert(worker.key.as_str()) {
                return Err(PayrollError::InvalidRoster {
                    message: format!("duplicate worker key '{}'", worker.key),
                });
            }
        }

        Ok(())
    }

    /// Returns the household metadata.
    pub fn household(&self) -> &super::HouseholdMetadata {
        &self.roster.household
    }

    /// Returns the raw roster configuration.
    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }

    /// Builds the default payroll record defined by the roster.
    ///
    /// Every call returns a fresh copy; the loader itself never holds
    /// mutable payroll state.
    pub fn default_record(&self) -> PayrollRecord {
        PayrollRecord {
            workers: self
                .roster
                .workers
                .iter()
                .map(|w| Worker {
                    key: w.key.clone(),
                    name: w.name.clone(),
                    rate: w.rate,
                    hours: w.hours.clone(),
                })
                .collect(),
            transit_swipes: self.roster.transit_swipes,
        }
    }
}
