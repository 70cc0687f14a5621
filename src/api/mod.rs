//! HTTP API module for the Weekly Payroll Engine.
//!
//! This module provides the REST endpoints through which a form front-end
//! reads the payroll record and applies field updates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ResetRequest, ValueUpdateRequest};
pub use response::ApiError;
pub use state::AppState;
