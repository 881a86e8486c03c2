//! Directory Service Library
//!
//! This crate provides the in-memory Country and Person directories.
//! Every operation is synchronous and runs to completion; hosts may call
//! them from async handlers without blocking concerns.

pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::repository::{CountryStore, PersonStore};
use crate::service::{CountryDirectory, CountryManager, PersonDirectory, PersonManager};

/// The two directories of one running process.
#[derive(Clone)]
pub struct Directories {
    pub countries: Arc<dyn CountryDirectory>,
    pub persons: Arc<dyn PersonDirectory>,
}

impl Directories {
    /// Wire both directories to fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        let country_repo = Arc::new(CountryStore::new());
        let person_repo = Arc::new(PersonStore::new());

        info!("In-memory directories initialized");

        Self {
            countries: Arc::new(CountryManager::new(country_repo)),
            persons: Arc::new(PersonManager::new(person_repo)),
        }
    }
}
