//! Column selectors for searching and sorting people.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    COLUMN_ADDRESS, COLUMN_COUNTRY_ID, COLUMN_DATE_OF_BIRTH, COLUMN_EMAIL, COLUMN_PERSON_NAME,
    DATE_OF_BIRTH_SEARCH_FORMAT,
};
use crate::person::Person;

/// A Person field usable as a filter or sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonColumn {
    PersonName,
    Email,
    Address,
    DateOfBirth,
    CountryId,
}

impl PersonColumn {
    pub const ALL: [PersonColumn; 5] = [
        PersonColumn::PersonName,
        PersonColumn::Email,
        PersonColumn::Address,
        PersonColumn::DateOfBirth,
        PersonColumn::CountryId,
    ];

    /// Canonical column name
    pub fn name(&self) -> &'static str {
        match self {
            PersonColumn::PersonName => COLUMN_PERSON_NAME,
            PersonColumn::Email => COLUMN_EMAIL,
            PersonColumn::Address => COLUMN_ADDRESS,
            PersonColumn::DateOfBirth => COLUMN_DATE_OF_BIRTH,
            PersonColumn::CountryId => COLUMN_COUNTRY_ID,
        }
    }

    /// Text form of this column's value, `None` when the field is absent.
    ///
    /// Dates render as `yyyy-MM-dd`; country ids as hyphenated lower-case.
    pub fn text_of(&self, person: &Person) -> Option<String> {
        match self {
            PersonColumn::PersonName => Some(person.person_name.clone()),
            PersonColumn::Email => person.email.clone(),
            PersonColumn::Address => person.address.clone(),
            PersonColumn::DateOfBirth => person
                .date_of_birth
                .map(|dob| dob.format(DATE_OF_BIRTH_SEARCH_FORMAT).to_string()),
            PersonColumn::CountryId => person.country_id.map(|id| id.to_string()),
        }
    }

    /// Case-insensitive substring match. Absent values never match; an
    /// empty needle matches every present value.
    pub fn matches(&self, person: &Person, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.text_of(person)
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    }

    /// Natural ordering of this column. Absent values sort lowest.
    pub fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            PersonColumn::PersonName => a.person_name.cmp(&b.person_name),
            PersonColumn::Email => a.email.cmp(&b.email),
            PersonColumn::Address => a.address.cmp(&b.address),
            PersonColumn::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
            PersonColumn::CountryId => a.country_id.cmp(&b.country_id),
        }
    }
}

impl FromStr for PersonColumn {
    type Err = ();

    /// Column names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonColumn::ALL
            .into_iter()
            .find(|column| column.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl std::fmt::Display for PersonColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Apply this direction to an ascending ordering
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}
