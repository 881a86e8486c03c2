//! Application state for dependency injection.

use std::sync::Arc;

use directory_service_lib::service::{CountryDirectory, PersonDirectory};
use directory_service_lib::Directories;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub countries: Arc<dyn CountryDirectory>,
    pub persons: Arc<dyn PersonDirectory>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(directories: Directories, config: GatewayConfig) -> Self {
        Self {
            countries: directories.countries,
            persons: directories.persons,
            config,
        }
    }
}
