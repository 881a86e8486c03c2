//! Request extractors.

mod json_body;
mod params;

pub use json_body::JsonBody;
pub use params::{PathParam, QueryParams};
