//! Request types for the Weekly Payroll Engine API.
//!
//! This module defines the JSON request structures for the update endpoints.

use serde::{Deserialize, Serialize};

/// Request body for field update endpoints.
///
/// The value is carried as raw text, exactly as the user typed it into the
/// form. Coercion to a number happens in the handler: empty or non-numeric
/// text becomes zero and is never rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueUpdateRequest {
    /// The raw text entered for the field.
    pub value: String,
}

/// Request body for the reset endpoint.
///
/// Resetting discards every entry made this session, so it must be
/// explicitly confirmed; a request without `"confirm": true` is refused
/// and leaves the record untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRequest {
    /// Whether the user confirmed the reset.
    #[serde(default)]
    pub confirm: bool,
}
