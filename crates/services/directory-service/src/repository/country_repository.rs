//! In-memory country repository.

use parking_lot::RwLock;
use uuid::Uuid;

use domain::{Country, DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Country repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CountryRepository: Send + Sync {
    /// Find country by ID
    fn find_by_id(&self, id: Uuid) -> Option<Country>;

    /// Store a new country under a fresh id.
    ///
    /// Fails with `Conflict` if the name is already taken; the check and
    /// the insert happen under one lock.
    fn create(&self, country_name: String) -> DomainResult<Country>;

    /// List all countries in insertion order
    fn list(&self) -> Vec<Country>;

    /// Number of stored countries
    fn count(&self) -> usize;
}

/// Concrete implementation of CountryRepository backed by a locked `Vec`.
///
/// Lookups are linear scans; insertion order is the list order.
#[derive(Default)]
pub struct CountryStore {
    countries: RwLock<Vec<Country>>,
}

impl CountryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountryRepository for CountryStore {
    fn find_by_id(&self, id: Uuid) -> Option<Country> {
        self.countries
            .read()
            .iter()
            .find(|c| c.country_id == id)
            .cloned()
    }

    fn create(&self, country_name: String) -> DomainResult<Country> {
        let mut countries = self.countries.write();

        if countries.iter().any(|c| c.has_name(&country_name)) {
            return Err(DomainError::conflict(format!("Country '{}'", country_name)));
        }

        let mut country = Country::new(country_name);
        while countries.iter().any(|c| c.country_id == country.country_id) {
            country.country_id = Uuid::new_v4();
        }

        countries.push(country.clone());
        Ok(country)
    }

    fn list(&self) -> Vec<Country> {
        self.countries.read().clone()
    }

    fn count(&self) -> usize {
        self.countries.read().len()
    }
}
