//! HTTP handlers.

pub mod country_handler;
pub mod health_handler;
pub mod person_handler;

pub use country_handler::country_routes;
pub use health_handler::health_routes;
pub use person_handler::person_routes;
