//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::{HealthResponse, RecordCounts};
use domain::{
    CountryAddRequest, CountryResponse, GenderOptions, PersonAddRequest, PersonResponse,
    PersonUpdateRequest, SortOrder,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::country_handler::add_country,
        crate::handlers::country_handler::list_countries,
        crate::handlers::country_handler::get_country,
        crate::handlers::person_handler::add_person,
        crate::handlers::person_handler::list_persons,
        crate::handlers::person_handler::search_persons,
        crate::handlers::person_handler::sort_persons,
        crate::handlers::person_handler::get_person,
        crate::handlers::person_handler::update_person,
        crate::handlers::person_handler::delete_person,
    ),
    components(
        schemas(
            HealthResponse,
            RecordCounts,
            CountryAddRequest,
            CountryResponse,
            GenderOptions,
            SortOrder,
            PersonAddRequest,
            PersonUpdateRequest,
            PersonResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Countries", description = "Country directory endpoints"),
        (name = "Persons", description = "Person directory endpoints"),
    )
)]
pub struct ApiDoc;
