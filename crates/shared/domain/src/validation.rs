//! Field rules for new people.
//!
//! Every rule is evaluated; the resulting error carries all violated
//! messages so callers see every problem at once.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{
    MAX_PERSON_NAME_LENGTH, MSG_DATE_OF_BIRTH_NOT_PAST, MSG_PERSON_NAME_REQUIRED,
    MSG_PERSON_NAME_TOO_LONG,
};
use crate::error::{DomainError, DomainResult};
use crate::person::PersonAddRequest;

/// Order in which violated rules are reported
const FIELD_ORDER: &[&str] = &["person_name", "email", "date_of_birth"];

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Name must be present, non-blank, and at most 100 characters.
pub fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(rule_error("required", MSG_PERSON_NAME_REQUIRED));
    }
    if name.chars().count() > MAX_PERSON_NAME_LENGTH {
        return Err(rule_error("max_length", MSG_PERSON_NAME_TOO_LONG));
    }
    Ok(())
}

/// Date of birth must be strictly before the current time.
pub fn validate_date_of_birth(date_of_birth: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *date_of_birth < Utc::now() {
        Ok(())
    } else {
        Err(rule_error("past_date", MSG_DATE_OF_BIRTH_NOT_PAST))
    }
}

fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errors| errors.iter())
        .map(|error| {
            error
                .message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| error.code.to_string())
        })
        .collect()
}

/// Run every rule against a person add request.
pub fn validate_person_add_request(request: &PersonAddRequest) -> DomainResult<()> {
    request.validate().map_err(|errors| {
        let messages = collect_messages(&errors);
        tracing::warn!(violations = messages.len(), "Person add request rejected");
        DomainError::validation_failed(messages)
    })
}
