//! Person directory integration tests.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use directory_service_lib::repository::PersonStore;
use directory_service_lib::service::{PersonDirectory, PersonManager};
use domain::{
    DomainError, GenderOptions, PersonAddRequest, PersonResponse, PersonUpdateRequest, SortOrder,
};

fn directory() -> PersonManager {
    PersonManager::new(Arc::new(PersonStore::new()))
}

fn named(name: &str) -> PersonAddRequest {
    PersonAddRequest {
        person_name: name.to_string(),
        ..Default::default()
    }
}

/// Adds "John Doe", "Jane Smith" and "zak Smith", in that order.
fn add_test_persons(service: &PersonManager) -> Vec<PersonResponse> {
    let requests = [
        PersonAddRequest {
            person_name: "John Doe".to_string(),
            address: Some("123 Main St".to_string()),
            country_id: Some(Uuid::new_v4()),
            date_of_birth: Some(Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap()),
            email: Some("ename@example.com".to_string()),
            gender: Some(GenderOptions::Female),
            receive_news_letters: true,
        },
        PersonAddRequest {
            person_name: "Jane Smith".to_string(),
            address: Some("5 Main St".to_string()),
            country_id: Some(Uuid::new_v4()),
            date_of_birth: Some(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()),
            email: Some("ename1@example.com".to_string()),
            gender: Some(GenderOptions::Male),
            receive_news_letters: false,
        },
        PersonAddRequest {
            person_name: "zak Smith".to_string(),
            address: Some("8 Main St".to_string()),
            country_id: Some(Uuid::new_v4()),
            date_of_birth: Some(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()),
            email: Some("ename1@example.com".to_string()),
            gender: Some(GenderOptions::Male),
            receive_news_letters: false,
        },
    ];

    requests
        .into_iter()
        .map(|request| service.add_person(Some(request)).unwrap())
        .collect()
}

fn names(people: &[PersonResponse]) -> Vec<&str> {
    people.iter().map(|p| p.person_name.as_str()).collect()
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_person_null_request() {
    let service = directory();
    assert!(matches!(
        service.add_person(None),
        Err(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn test_add_person_empty_name() {
    let service = directory();
    let result = service.add_person(Some(named("")));

    assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
    assert!(service.get_all_persons().is_empty());
}

#[test]
fn test_add_person_invalid_email() {
    let service = directory();
    let result = service.add_person(Some(PersonAddRequest {
        email: Some("not an email".to_string()),
        ..named("John Doe")
    }));

    assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
}

#[test]
fn test_add_person_future_date_of_birth() {
    let service = directory();
    let result = service.add_person(Some(PersonAddRequest {
        date_of_birth: Some(Utc::now() + Duration::days(10)),
        ..named("John Doe")
    }));

    assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
}

#[test]
fn test_add_person_reports_every_violation() {
    let service = directory();
    let err = service
        .add_person(Some(PersonAddRequest {
            email: Some("broken".to_string()),
            date_of_birth: Some(Utc::now() + Duration::days(10)),
            ..named("")
        }))
        .unwrap_err();

    let messages = err.validation_messages().unwrap();
    assert_eq!(messages.lines().count(), 3);
}

#[test]
fn test_add_person_returns_response_shape() {
    let service = directory();
    let country_id = Uuid::new_v4();

    let added = service
        .add_person(Some(PersonAddRequest {
            email: Some("john@example.com".to_string()),
            gender: Some(GenderOptions::Other),
            country_id: Some(country_id),
            receive_news_letters: true,
            ..named("John Doe")
        }))
        .unwrap();

    assert_eq!(added.person_name, "John Doe");
    assert_eq!(added.gender, Some(GenderOptions::Other));
    assert_eq!(added.country_id, Some(country_id));
    assert!(added.receive_news_letters);
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_get_person_by_id_found() {
    let service = directory();
    let added = service.add_person(Some(named("John Doe"))).unwrap();

    let found = service.get_person_by_id(added.person_id).unwrap();
    assert_eq!(found, added);
}

#[test]
fn test_get_person_by_id_not_found() {
    let service = directory();
    service.add_person(Some(named("John Doe"))).unwrap();

    assert!(matches!(
        service.get_person_by_id(Uuid::new_v4()),
        Err(DomainError::NotFound(_))
    ));
}

#[test]
fn test_get_all_persons_empty() {
    assert!(directory().get_all_persons().is_empty());
}

#[test]
fn test_get_all_persons_insertion_order() {
    let service = directory();
    add_test_persons(&service);

    let all = service.get_all_persons();
    assert_eq!(names(&all), vec!["John Doe", "Jane Smith", "zak Smith"]);
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_get_persons_by_name() {
    let service = directory();
    add_test_persons(&service);

    let result = service.get_persons_by("John", "PersonName");
    assert_eq!(names(&result), vec!["John Doe"]);
}

#[test]
fn test_get_persons_by_empty_search_returns_all() {
    let service = directory();
    add_test_persons(&service);

    let result = service.get_persons_by("", "PersonName");
    assert_eq!(result.len(), 3);
}

#[test]
fn test_get_persons_by_empty_store() {
    let service = directory();
    assert!(service.get_persons_by("", "PersonName").is_empty());
}

#[test]
fn test_get_persons_by_ignores_case() {
    let service = directory();
    add_test_persons(&service);

    let result = service.get_persons_by("SMITH", "personname");
    assert_eq!(names(&result), vec!["Jane Smith", "zak Smith"]);

    let result = service.get_persons_by("ENAME1@", "Email");
    assert_eq!(result.len(), 2);
}

#[test]
fn test_get_persons_by_date_of_birth_text() {
    let service = directory();
    add_test_persons(&service);

    let result = service.get_persons_by("2000-01", "DateOfBirth");
    assert_eq!(names(&result), vec!["Jane Smith"]);
}

#[test]
fn test_get_persons_by_country_id_text() {
    let service = directory();
    let added = add_test_persons(&service);
    let country_id = added[2].country_id.unwrap().to_string();

    let result = service.get_persons_by(&country_id[..8], "CountryId");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].person_id, added[2].person_id);
}

#[test]
fn test_get_persons_by_skips_absent_values() {
    let service = directory();
    add_test_persons(&service);
    service.add_person(Some(named("No Address"))).unwrap();

    let result = service.get_persons_by("", "Address");
    assert_eq!(result.len(), 3);
}

#[test]
fn test_get_persons_by_unknown_column_returns_empty() {
    let service = directory();
    add_test_persons(&service);

    assert!(service.get_persons_by("", "Gender").is_empty());
}

// =============================================================================
// Sort
// =============================================================================

#[test]
fn test_sort_by_name_ascending() {
    let service = directory();
    add_test_persons(&service);

    let result = service
        .get_persons_with_sorting("PersonName", SortOrder::Ascending)
        .unwrap();
    assert_eq!(names(&result), vec!["Jane Smith", "John Doe", "zak Smith"]);
}

#[test]
fn test_sort_by_name_descending() {
    let service = directory();
    add_test_persons(&service);

    let result = service
        .get_persons_with_sorting("PersonName", SortOrder::Descending)
        .unwrap();
    assert_eq!(names(&result), vec!["zak Smith", "John Doe", "Jane Smith"]);
}

#[test]
fn test_sort_by_date_of_birth_descending() {
    let service = directory();
    add_test_persons(&service);

    let result = service
        .get_persons_with_sorting("dateofbirth", SortOrder::Descending)
        .unwrap();
    assert_eq!(names(&result), vec!["zak Smith", "Jane Smith", "John Doe"]);
}

#[test]
fn test_sort_by_address_ascending() {
    let service = directory();
    add_test_persons(&service);
    service
        .add_person(Some(PersonAddRequest {
            address: Some("0 Elm St".to_string()),
            ..named("Amy Lee")
        }))
        .unwrap();

    let result = service
        .get_persons_with_sorting("Address", SortOrder::Ascending)
        .unwrap();
    assert_eq!(
        names(&result),
        vec!["Amy Lee", "John Doe", "Jane Smith", "zak Smith"]
    );
}

#[test]
fn test_sort_by_country_id_ascending() {
    let service = directory();
    let mut expected = add_test_persons(&service);
    expected.sort_by_key(|p| p.country_id);

    let result = service
        .get_persons_with_sorting("CountryId", SortOrder::Ascending)
        .unwrap();

    let ids: Vec<_> = result.iter().map(|p| p.person_id).collect();
    let expected_ids: Vec<_> = expected.iter().map(|p| p.person_id).collect();
    assert_eq!(ids, expected_ids);
}

#[test]
fn test_sort_absent_values_first_when_ascending() {
    let service = directory();
    add_test_persons(&service);
    service.add_person(Some(named("No Email"))).unwrap();

    let result = service
        .get_persons_with_sorting("Email", SortOrder::Ascending)
        .unwrap();
    assert_eq!(result[0].person_name, "No Email");
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let service = directory();
    add_test_persons(&service);

    // Jane and zak share an email; their relative order must be kept
    let result = service
        .get_persons_with_sorting("Email", SortOrder::Descending)
        .unwrap();
    assert_eq!(names(&result), vec!["John Doe", "Jane Smith", "zak Smith"]);

    let result = service
        .get_persons_with_sorting("Email", SortOrder::Ascending)
        .unwrap();
    assert_eq!(names(&result), vec!["Jane Smith", "zak Smith", "John Doe"]);
}

#[test]
fn test_sort_blank_column_returns_insertion_order() {
    let service = directory();
    add_test_persons(&service);

    let result = service
        .get_persons_with_sorting("", SortOrder::Descending)
        .unwrap();
    assert_eq!(names(&result), vec!["John Doe", "Jane Smith", "zak Smith"]);
}

#[test]
fn test_sort_unknown_column_is_invalid_argument() {
    let service = directory();
    add_test_persons(&service);

    assert!(matches!(
        service.get_persons_with_sorting("Gender", SortOrder::Ascending),
        Err(DomainError::InvalidArgument(_))
    ));
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn test_update_person_reflects_every_new_value() {
    let service = directory();
    let added = service
        .add_person(Some(PersonAddRequest {
            address: Some("123 ".to_string()),
            email: Some("milo@example.com".to_string()),
            gender: Some(GenderOptions::Male),
            ..named("John Doe")
        }))
        .unwrap();

    let country_id = Uuid::new_v4();
    let date_of_birth = Utc.with_ymd_and_hms(1985, 6, 15, 0, 0, 0).unwrap();
    let updated = service
        .update_person(PersonUpdateRequest {
            person_id: added.person_id,
            person_name: "John Doe Updated".to_string(),
            email: Some("updated@example.com".to_string()),
            date_of_birth: Some(date_of_birth),
            gender: Some(GenderOptions::Female),
            country_id: Some(country_id),
            address: Some("123 Updated".to_string()),
            receive_news_letters: true,
        })
        .unwrap();

    assert_eq!(updated.person_id, added.person_id);
    assert_eq!(updated.person_name, "John Doe Updated");
    assert_eq!(updated.email.as_deref(), Some("updated@example.com"));
    assert_eq!(updated.date_of_birth, Some(date_of_birth));
    assert_eq!(updated.gender, Some(GenderOptions::Female));
    assert_eq!(updated.country_id, Some(country_id));
    assert_eq!(updated.address.as_deref(), Some("123 Updated"));
    assert!(updated.receive_news_letters);
    assert_eq!(service.get_person_by_id(added.person_id).unwrap(), updated);
}

#[test]
fn test_update_person_is_full_replace() {
    let service = directory();
    let added = service
        .add_person(Some(PersonAddRequest {
            email: Some("milo@example.com".to_string()),
            address: Some("123 Main St".to_string()),
            ..named("John Doe")
        }))
        .unwrap();

    let updated = service
        .update_person(PersonUpdateRequest {
            person_id: added.person_id,
            person_name: "John Doe".to_string(),
            ..Default::default()
        })
        .unwrap();

    assert!(updated.email.is_none());
    assert!(updated.address.is_none());
}

#[test]
fn test_update_person_not_found_leaves_store_unchanged() {
    let service = directory();
    add_test_persons(&service);
    let before = service.get_all_persons();

    let result = service.update_person(PersonUpdateRequest {
        person_id: Uuid::new_v4(),
        person_name: "John Doe Updated".to_string(),
        ..Default::default()
    });

    assert!(matches!(result, Err(DomainError::NotFound(_))));
    assert_eq!(service.get_all_persons(), before);
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_person_then_lookup_fails() {
    let service = directory();
    let added = service.add_person(Some(named("John Doe"))).unwrap();

    let deleted = service.delete_person(added.person_id).unwrap();
    assert_eq!(deleted.person_id, added.person_id);

    assert!(matches!(
        service.get_person_by_id(added.person_id),
        Err(DomainError::NotFound(_))
    ));
    assert_eq!(service.count(), 0);
}

#[test]
fn test_delete_person_not_found() {
    let service = directory();
    add_test_persons(&service);

    assert!(matches!(
        service.delete_person(Uuid::new_v4()),
        Err(DomainError::NotFound(_))
    ));
    assert_eq!(service.count(), 3);
}
