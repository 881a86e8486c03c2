//! Country record and its request/response shapes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored country record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub country_id: Uuid,
    pub country_name: String,
}

impl Country {
    /// Create a country with a freshly generated id
    pub fn new(country_name: String) -> Self {
        Self {
            country_id: Uuid::new_v4(),
            country_name,
        }
    }

    /// Case-insensitive name comparison used for the uniqueness rule
    pub fn has_name(&self, name: &str) -> bool {
        self.country_name.to_lowercase() == name.to_lowercase()
    }
}

/// Country creation data transfer object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CountryAddRequest {
    /// Country display name (unique, case-insensitive)
    pub country_name: String,
}

impl CountryAddRequest {
    pub fn new(country_name: impl Into<String>) -> Self {
        Self {
            country_name: country_name.into(),
        }
    }
}

/// Country response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CountryResponse {
    /// Unique country identifier
    pub country_id: Uuid,
    /// Country display name
    pub country_name: String,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        Self {
            country_id: country.country_id,
            country_name: country.country_name,
        }
    }
}
