//! Application state for the Weekly Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, RwLock};

use crate::store::PayrollStore;

/// Shared application state.
///
/// Wraps the single [`PayrollStore`] behind a lock so handlers can mutate
/// it. There is one logical writer (the user driving the form); the lock
/// exists because the HTTP runtime is concurrent, not because the domain
/// is.
#[derive(Clone)]
pub struct AppState {
    /// The session's payroll store.
    store: Arc<RwLock<PayrollStore>>,
}

impl AppState {
    /// Creates a new application state owning the given store.
    pub fn new(store: PayrollStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Returns the lock around the payroll store.
    pub fn store(&self) -> &RwLock<PayrollStore> {
        &self.store
    }
}
