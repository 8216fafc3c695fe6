//! Application state for the labour cost API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RatesLoader;
use crate::store::ProfileStore;

/// Shared application state.
///
/// Holds the loaded contribution rate sets and the profile store used by
/// every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate configuration.
    rates: Arc<RatesLoader>,
    /// Saved employee profiles.
    profiles: Arc<dyn ProfileStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(rates: RatesLoader, profiles: impl ProfileStore + 'static) -> Self {
        Self {
            rates: Arc::new(rates),
            profiles: Arc::new(profiles),
        }
    }

    /// Returns the rate configuration.
    pub fn rates(&self) -> &RatesLoader {
        &self.rates
    }

    /// Returns the profile store.
    pub fn profiles(&self) -> &dyn ProfileStore {
        self.profiles.as_ref()
    }
}
