//! In-memory person repository.

use parking_lot::RwLock;
use uuid::Uuid;

use domain::{DomainError, DomainResult, Person, PersonAddRequest, PersonUpdateRequest};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Person repository trait for dependency injection.
///
/// Removal is permanent; there is no soft delete.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PersonRepository: Send + Sync {
    /// Find person by ID
    fn find_by_id(&self, id: Uuid) -> Option<Person>;

    /// Store a new person under a fresh id
    fn create(&self, request: PersonAddRequest) -> Person;

    /// Replace every mutable field of an existing person
    fn update(&self, request: PersonUpdateRequest) -> DomainResult<Person>;

    /// Remove a person, returning the removed record
    fn delete(&self, id: Uuid) -> DomainResult<Person>;

    /// List all people in insertion order
    fn list(&self) -> Vec<Person>;

    /// Number of stored people
    fn count(&self) -> usize;
}

/// Concrete implementation of PersonRepository backed by a locked `Vec`.
///
/// Every operation holds the lock for its whole duration, so a failed
/// update or delete leaves the list untouched.
#[derive(Default)]
pub struct PersonStore {
    people: RwLock<Vec<Person>>,
}

impl PersonStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::not_found(format!("Person with ID {}", id))
}

impl PersonRepository for PersonStore {
    fn find_by_id(&self, id: Uuid) -> Option<Person> {
        self.people
            .read()
            .iter()
            .find(|p| p.person_id == id)
            .cloned()
    }

    fn create(&self, request: PersonAddRequest) -> Person {
        let mut people = self.people.write();

        let mut id = Uuid::new_v4();
        while people.iter().any(|p| p.person_id == id) {
            id = Uuid::new_v4();
        }

        let person = request.into_person(id);
        people.push(person.clone());
        person
    }

    fn update(&self, request: PersonUpdateRequest) -> DomainResult<Person> {
        let mut people = self.people.write();
        let id = request.person_id;

        let person = people
            .iter_mut()
            .find(|p| p.person_id == id)
            .ok_or_else(|| not_found(id))?;

        person.apply_update(request);
        Ok(person.clone())
    }

    fn delete(&self, id: Uuid) -> DomainResult<Person> {
        let mut people = self.people.write();

        let index = people
            .iter()
            .position(|p| p.person_id == id)
            .ok_or_else(|| not_found(id))?;

        Ok(people.remove(index))
    }

    fn list(&self) -> Vec<Person> {
        self.people.read().clone()
    }

    fn count(&self) -> usize {
        self.people.read().len()
    }
}
