//! Domain layer - Core record types and the rules that govern them.
//!
//! This crate holds the Country and Person records, their request and
//! response shapes, the column selectors used for search and sort, and
//! the validation rules applied to new people. It has no knowledge of
//! storage or transport.

pub mod column;
pub mod constants;
pub mod country;
pub mod date;
pub mod error;
pub mod person;
pub mod validation;

pub use column::{PersonColumn, SortOrder};
pub use constants::*;
pub use country::{Country, CountryAddRequest, CountryResponse};
pub use error::{DomainError, DomainResult};
pub use person::{GenderOptions, Person, PersonAddRequest, PersonResponse, PersonUpdateRequest};
pub use validation::validate_person_add_request;
