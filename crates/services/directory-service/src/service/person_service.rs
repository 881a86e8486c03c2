//! Person directory - Handles person-related operations.
//!
//! Searching and sorting are driven by [`PersonColumn`]. The two differ
//! on unknown column names: a search yields no records, while a sort
//! fails with `InvalidArgument`.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use domain::{
    validate_person_add_request, DomainError, DomainResult, PersonAddRequest, PersonColumn,
    PersonResponse, PersonUpdateRequest, SortOrder,
};

use crate::repository::PersonRepository;

/// Person directory trait for dependency injection.
pub trait PersonDirectory: Send + Sync {
    /// Validate and add a new person
    fn add_person(&self, request: Option<PersonAddRequest>) -> DomainResult<PersonResponse>;

    /// Get person by ID
    fn get_person_by_id(&self, id: Uuid) -> DomainResult<PersonResponse>;

    /// All people in insertion order
    fn get_all_persons(&self) -> Vec<PersonResponse>;

    /// People whose `column_name` value contains `search_string`, ignoring case
    fn get_persons_by(&self, search_string: &str, column_name: &str) -> Vec<PersonResponse>;

    /// All people, stably sorted by `column_name`
    fn get_persons_with_sorting(
        &self,
        column_name: &str,
        sort_order: SortOrder,
    ) -> DomainResult<Vec<PersonResponse>>;

    /// Replace every mutable field of an existing person
    fn update_person(&self, request: PersonUpdateRequest) -> DomainResult<PersonResponse>;

    /// Remove a person, returning the removed record
    fn delete_person(&self, id: Uuid) -> DomainResult<PersonResponse>;

    /// Number of stored people
    fn count(&self) -> usize;
}

/// Concrete implementation of PersonDirectory using a repository.
pub struct PersonManager {
    repo: Arc<dyn PersonRepository>,
}

impl PersonManager {
    /// Create new person directory with repository
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }
}

impl PersonDirectory for PersonManager {
    fn add_person(&self, request: Option<PersonAddRequest>) -> DomainResult<PersonResponse> {
        let request =
            request.ok_or_else(|| DomainError::invalid_argument("Person add request is required"))?;

        validate_person_add_request(&request)?;

        let person = self.repo.create(request);
        info!(person_id = %person.person_id, "Person added");
        Ok(PersonResponse::from(person))
    }

    fn get_person_by_id(&self, id: Uuid) -> DomainResult<PersonResponse> {
        debug!(person_id = %id, "Looking up person");
        self.repo
            .find_by_id(id)
            .map(PersonResponse::from)
            .ok_or_else(|| DomainError::not_found(format!("Person with ID {}", id)))
    }

    fn get_all_persons(&self) -> Vec<PersonResponse> {
        self.repo.list().into_iter().map(PersonResponse::from).collect()
    }

    fn get_persons_by(&self, search_string: &str, column_name: &str) -> Vec<PersonResponse> {
        let Ok(column) = column_name.parse::<PersonColumn>() else {
            debug!(column = column_name, "Search on unknown column matches nothing");
            return Vec::new();
        };

        self.repo
            .list()
            .into_iter()
            .filter(|person| column.matches(person, search_string))
            .map(PersonResponse::from)
            .collect()
    }

    fn get_persons_with_sorting(
        &self,
        column_name: &str,
        sort_order: SortOrder,
    ) -> DomainResult<Vec<PersonResponse>> {
        if column_name.trim().is_empty() {
            return Ok(self.get_all_persons());
        }

        let column = column_name.parse::<PersonColumn>().map_err(|_| {
            warn!(column = column_name, "Sort on unknown column");
            DomainError::invalid_argument(format!("Invalid column name: {}", column_name))
        })?;

        let mut people = self.repo.list();
        // sort_by is stable, so equal keys keep insertion order in both directions
        people.sort_by(|a, b| sort_order.apply(column.compare(a, b)));

        Ok(people.into_iter().map(PersonResponse::from).collect())
    }

    fn update_person(&self, request: PersonUpdateRequest) -> DomainResult<PersonResponse> {
        let person = self.repo.update(request)?;
        info!(person_id = %person.person_id, "Person updated");
        Ok(PersonResponse::from(person))
    }

    fn delete_person(&self, id: Uuid) -> DomainResult<PersonResponse> {
        let person = self.repo.delete(id)?;
        info!(person_id = %id, "Person deleted");
        Ok(PersonResponse::from(person))
    }

    fn count(&self) -> usize {
        self.repo.count()
    }
}
