//! Domain-level constants.
//!
//! These constants define business rules and the text forms used when
//! records are stored, searched, or rendered.

// =============================================================================
// Gender
// =============================================================================

/// Stored text for a male person
pub const GENDER_MALE: &str = "Male";

/// Stored text for a female person
pub const GENDER_FEMALE: &str = "Female";

/// Stored text for any other gender
pub const GENDER_OTHER: &str = "Other";

// =============================================================================
// Columns
// =============================================================================

/// Column selector for the person's name
pub const COLUMN_PERSON_NAME: &str = "PersonName";

/// Column selector for the email address
pub const COLUMN_EMAIL: &str = "Email";

/// Column selector for the postal address
pub const COLUMN_ADDRESS: &str = "Address";

/// Column selector for the date of birth
pub const COLUMN_DATE_OF_BIRTH: &str = "DateOfBirth";

/// Column selector for the referenced country
pub const COLUMN_COUNTRY_ID: &str = "CountryId";

/// Format used when a date of birth is searched as text (`yyyy-MM-dd`)
pub const DATE_OF_BIRTH_SEARCH_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Validation
// =============================================================================

/// Maximum number of characters in a person's name
pub const MAX_PERSON_NAME_LENGTH: usize = 100;

/// Message reported when the person name is missing
pub const MSG_PERSON_NAME_REQUIRED: &str = "Person Name is required.";

/// Message reported when the person name is too long
pub const MSG_PERSON_NAME_TOO_LONG: &str = "Person Name cannot exceed 100 characters.";

/// Message reported for a malformed email address
pub const MSG_INVALID_EMAIL: &str = "Invalid email format.";

/// Message reported for a date of birth that is not in the past
pub const MSG_DATE_OF_BIRTH_NOT_PAST: &str = "Date of Birth must be in the past.";
