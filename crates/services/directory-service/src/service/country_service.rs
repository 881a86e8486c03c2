//! Country directory - Handles country-related operations.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use domain::{CountryAddRequest, CountryResponse, DomainError, DomainResult};

use crate::repository::CountryRepository;

/// Country directory trait for dependency injection.
pub trait CountryDirectory: Send + Sync {
    /// Add a new country with a unique (case-insensitive) name
    fn add_country(&self, request: Option<CountryAddRequest>) -> DomainResult<CountryResponse>;

    /// All countries in insertion order
    fn get_all_countries(&self) -> Vec<CountryResponse>;

    /// Get country by ID
    fn get_country_by_id(&self, id: Uuid) -> DomainResult<CountryResponse>;

    /// Number of stored countries
    fn count(&self) -> usize;
}

/// Concrete implementation of CountryDirectory using a repository.
pub struct CountryManager {
    repo: Arc<dyn CountryRepository>,
}

impl CountryManager {
    /// Create new country directory with repository
    pub fn new(repo: Arc<dyn CountryRepository>) -> Self {
        Self { repo }
    }
}

impl CountryDirectory for CountryManager {
    fn add_country(&self, request: Option<CountryAddRequest>) -> DomainResult<CountryResponse> {
        let request =
            request.ok_or_else(|| DomainError::invalid_argument("Country add request is required"))?;

        if request.country_name.is_empty() {
            warn!("Rejected country with empty name");
            return Err(DomainError::invalid_argument(
                "Country name cannot be null or empty",
            ));
        }

        let country = self.repo.create(request.country_name).inspect_err(|e| {
            warn!(error = %e, "Rejected duplicate country");
        })?;

        info!(country_id = %country.country_id, name = %country.country_name, "Country added");
        Ok(CountryResponse::from(country))
    }

    fn get_all_countries(&self) -> Vec<CountryResponse> {
        self.repo.list().into_iter().map(CountryResponse::from).collect()
    }

    fn get_country_by_id(&self, id: Uuid) -> DomainResult<CountryResponse> {
        debug!(country_id = %id, "Looking up country");
        self.repo
            .find_by_id(id)
            .map(CountryResponse::from)
            .ok_or_else(|| DomainError::not_found(format!("Country with ID {}", id)))
    }

    fn count(&self) -> usize {
        self.repo.count()
    }
}
