//! Error types for the Weekly Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculator itself has no error paths (invalid numeric entry is
//! coerced to zero before it reaches the calculation layer); errors only
//! arise at the configuration and record-update seams.

use thiserror::Error;

/// The main error type for the Weekly Payroll Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The roster configuration was structurally invalid.
    #[error("Invalid roster: {message}")]
    InvalidRoster {
        /// A description of what made the roster invalid.
        message: String,
    },

    /// No worker with the given key exists in the payroll record.
    #[error("Worker not found: {key}")]
    WorkerNotFound {
        /// The worker key that was not found.
        key: String,
    },

    /// A weekday name outside the fixed Monday..Friday set.
    #[error("Unknown weekday: {value}")]
    UnknownWeekday {
        /// The text that failed to name a weekday.
        value: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/roster.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/roster.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_roster_displays_message() {
        let error = PayrollError::InvalidRoster {
            message: "roster contains no workers".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid roster: roster contains no workers");
    }

    #[test]
    fn test_worker_not_found_displays_key() {
        let error = PayrollError::WorkerNotFound {
            key: "unknown".to_string(),
        };
        assert_eq!(error.to_string(), "Worker not found: unknown");
    }

    #[test]
    fn test_unknown_weekday_displays_value() {
        let error = PayrollError::UnknownWeekday {
            value: "saturday".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown weekday: saturday");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_worker_not_found() -> PayrollResult<()> {
            Err(PayrollError::WorkerNotFound {
                key: "nobody".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_worker_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
