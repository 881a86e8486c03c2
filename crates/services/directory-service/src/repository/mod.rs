//! Repository layer for record storage.

mod country_repository;
mod person_repository;

pub use country_repository::{CountryRepository, CountryStore};
pub use person_repository::{PersonRepository, PersonStore};

#[cfg(any(test, feature = "test-utils"))]
pub use country_repository::MockCountryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use person_repository::MockPersonRepository;
