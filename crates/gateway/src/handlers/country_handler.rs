//! Country handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use common::AppResult;
use domain::{CountryAddRequest, CountryResponse};

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

/// Create country routes
pub fn country_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_countries).post(add_country))
        .route("/:id", get(get_country))
}

/// Add a new country
#[utoipa::path(
    post,
    path = "/countries",
    tag = "Countries",
    request_body = CountryAddRequest,
    responses(
        (status = 201, description = "Country created", body = CountryResponse),
        (status = 400, description = "Country name is empty"),
        (status = 409, description = "Country name already exists")
    )
)]
pub async fn add_country(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CountryAddRequest>,
) -> AppResult<(StatusCode, Json<CountryResponse>)> {
    let country = state.countries.add_country(Some(payload))?;
    Ok((StatusCode::CREATED, Json(country)))
}

/// List all countries
#[utoipa::path(
    get,
    path = "/countries",
    tag = "Countries",
    responses(
        (status = 200, description = "All countries in insertion order", body = Vec<CountryResponse>)
    )
)]
pub async fn list_countries(State(state): State<AppState>) -> Json<Vec<CountryResponse>> {
    Json(state.countries.get_all_countries())
}

/// Get country by ID
#[utoipa::path(
    get,
    path = "/countries/{id}",
    tag = "Countries",
    params(
        ("id" = Uuid, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Country details", body = CountryResponse),
        (status = 404, description = "Country not found")
    )
)]
pub async fn get_country(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> AppResult<Json<CountryResponse>> {
    Ok(Json(state.countries.get_country_by_id(id)?))
}
