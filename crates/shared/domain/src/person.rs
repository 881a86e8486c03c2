//! Person record and related types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{GENDER_FEMALE, GENDER_MALE, GENDER_OTHER};
use crate::validation::{validate_date_of_birth, validate_person_name};

/// Gender options enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum GenderOptions {
    Male,
    Female,
    Other,
}

impl GenderOptions {
    /// Parse stored gender text, yielding `None` when absent or unrecognized
    pub fn from_stored(text: Option<&str>) -> Option<Self> {
        text.and_then(|t| t.parse().ok())
    }
}

impl FromStr for GenderOptions {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GENDER_MALE => Ok(GenderOptions::Male),
            GENDER_FEMALE => Ok(GenderOptions::Female),
            GENDER_OTHER => Ok(GenderOptions::Other),
            _ => Err(()),
        }
    }
}

impl From<GenderOptions> for String {
    fn from(gender: GenderOptions) -> Self {
        gender.to_string()
    }
}

impl std::fmt::Display for GenderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenderOptions::Male => write!(f, "{}", GENDER_MALE),
            GenderOptions::Female => write!(f, "{}", GENDER_FEMALE),
            GenderOptions::Other => write!(f, "{}", GENDER_OTHER),
        }
    }
}

/// Stored person record
///
/// Gender is kept as free text; it is parsed back into [`GenderOptions`]
/// whenever a [`PersonResponse`] is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub person_id: Uuid,
    pub person_name: String,
    pub email: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<String>,
    pub country_id: Option<Uuid>,
    pub address: Option<String>,
    pub receive_news_letters: bool,
}

impl Person {
    /// Overwrite every mutable field from an update request.
    ///
    /// This is a full replace: optional fields missing from the request
    /// clear the stored value.
    pub fn apply_update(&mut self, request: PersonUpdateRequest) {
        self.person_name = request.person_name;
        self.email = request.email;
        self.address = request.address;
        self.date_of_birth = request.date_of_birth;
        self.country_id = request.country_id;
        self.gender = request.gender.map(String::from);
        self.receive_news_letters = request.receive_news_letters;
    }
}

/// Person creation data transfer object
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonAddRequest {
    /// Display name (required, at most 100 characters)
    #[validate(custom(function = "validate_person_name"))]
    #[serde(default)]
    pub person_name: String,
    /// Contact email address
    #[validate(email(code = "email", message = "Invalid email format."))]
    pub email: Option<String>,
    /// Date of birth (must be in the past); RFC 3339 or `yyyy-MM-dd`
    #[validate(custom(function = "validate_date_of_birth"))]
    #[serde(default, deserialize_with = "crate::date::deserialize_optional")]
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<GenderOptions>,
    /// Referenced country (not verified)
    pub country_id: Option<Uuid>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_news_letters: bool,
}

impl PersonAddRequest {
    /// Convert into a stored record under the given id
    pub fn into_person(self, person_id: Uuid) -> Person {
        Person {
            person_id,
            person_name: self.person_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            gender: self.gender.map(String::from),
            country_id: self.country_id,
            address: self.address,
            receive_news_letters: self.receive_news_letters,
        }
    }
}

/// Person update data transfer object
///
/// Every field is written back to the record; callers must resend the
/// full set of fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonUpdateRequest {
    /// Identifier of the person to update
    #[serde(default)]
    pub person_id: Uuid,
    #[serde(default)]
    pub person_name: String,
    pub email: Option<String>,
    /// RFC 3339 or `yyyy-MM-dd`
    #[serde(default, deserialize_with = "crate::date::deserialize_optional")]
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<GenderOptions>,
    pub country_id: Option<Uuid>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_news_letters: bool,
}

/// Person response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonResponse {
    /// Unique person identifier
    pub person_id: Uuid,
    pub person_name: String,
    pub email: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<GenderOptions>,
    pub address: Option<String>,
    pub country_id: Option<Uuid>,
    pub receive_news_letters: bool,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            person_id: person.person_id,
            gender: GenderOptions::from_stored(person.gender.as_deref()),
            person_name: person.person_name,
            email: person.email,
            date_of_birth: person.date_of_birth,
            address: person.address,
            country_id: person.country_id,
            receive_news_letters: person.receive_news_letters,
        }
    }
}
