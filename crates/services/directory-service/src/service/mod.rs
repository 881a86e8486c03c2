//! Directory services - the operations exposed to hosts.

mod country_service;
mod person_service;

pub use country_service::{CountryDirectory, CountryManager};
pub use person_service::{PersonDirectory, PersonManager};
