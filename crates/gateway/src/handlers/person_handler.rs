//! Person handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use common::AppResult;
use domain::{PersonAddRequest, PersonResponse, PersonUpdateRequest, SortOrder};

use crate::extractors::{JsonBody, PathParam, QueryParams};
use crate::state::AppState;

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring to look for (empty matches every record)
    #[serde(default)]
    pub search_string: String,
    /// Column to search: PersonName, Email, Address, DateOfBirth or CountryId
    pub column_name: String,
}

/// Sort query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SortQuery {
    /// Column to sort by; blank keeps insertion order
    #[serde(default)]
    pub column_name: String,
    /// Sort direction (defaults to ascending)
    #[serde(default)]
    pub sort_order: SortOrder,
}

/// Create person routes
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_persons).post(add_person))
        .route("/search", get(search_persons))
        .route("/sorted", get(sort_persons))
        .route(
            "/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
}

/// Add a new person
#[utoipa::path(
    post,
    path = "/persons",
    tag = "Persons",
    request_body = PersonAddRequest,
    responses(
        (status = 201, description = "Person created", body = PersonResponse),
        (status = 400, description = "Validation error, every violated rule listed")
    )
)]
pub async fn add_person(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PersonAddRequest>,
) -> AppResult<(StatusCode, Json<PersonResponse>)> {
    let person = state.persons.add_person(Some(payload))?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// List all persons
#[utoipa::path(
    get,
    path = "/persons",
    tag = "Persons",
    responses(
        (status = 200, description = "All persons in insertion order", body = Vec<PersonResponse>)
    )
)]
pub async fn list_persons(State(state): State<AppState>) -> Json<Vec<PersonResponse>> {
    Json(state.persons.get_all_persons())
}

/// Search persons by column
#[utoipa::path(
    get,
    path = "/persons/search",
    tag = "Persons",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching persons; empty for unknown columns", body = Vec<PersonResponse>)
    )
)]
pub async fn search_persons(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Json<Vec<PersonResponse>> {
    Json(
        state
            .persons
            .get_persons_by(&query.search_string, &query.column_name),
    )
}

/// List persons sorted by column
#[utoipa::path(
    get,
    path = "/persons/sorted",
    tag = "Persons",
    params(SortQuery),
    responses(
        (status = 200, description = "Sorted persons", body = Vec<PersonResponse>),
        (status = 400, description = "Unknown column name")
    )
)]
pub async fn sort_persons(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SortQuery>,
) -> AppResult<Json<Vec<PersonResponse>>> {
    let persons = state
        .persons
        .get_persons_with_sorting(&query.column_name, query.sort_order)?;
    Ok(Json(persons))
}

/// Get person by ID
#[utoipa::path(
    get,
    path = "/persons/{id}",
    tag = "Persons",
    params(
        ("id" = Uuid, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person details", body = PersonResponse),
        (status = 404, description = "Person not found")
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> AppResult<Json<PersonResponse>> {
    Ok(Json(state.persons.get_person_by_id(id)?))
}

/// Replace every field of a person
///
/// The path ID wins over any `person_id` in the body.
#[utoipa::path(
    put,
    path = "/persons/{id}",
    tag = "Persons",
    params(
        ("id" = Uuid, Path, description = "Person ID")
    ),
    request_body = PersonUpdateRequest,
    responses(
        (status = 200, description = "Person updated", body = PersonResponse),
        (status = 404, description = "Person not found")
    )
)]
pub async fn update_person(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
    JsonBody(mut payload): JsonBody<PersonUpdateRequest>,
) -> AppResult<Json<PersonResponse>> {
    payload.person_id = id;
    Ok(Json(state.persons.update_person(payload)?))
}

/// Delete a person
#[utoipa::path(
    delete,
    path = "/persons/{id}",
    tag = "Persons",
    params(
        ("id" = Uuid, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Deleted person", body = PersonResponse),
        (status = 404, description = "Person not found")
    )
)]
pub async fn delete_person(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> AppResult<Json<PersonResponse>> {
    Ok(Json(state.persons.delete_person(id)?))
}
