//! Helpers shared by the entity validation rules.
//!
//! Rules are declared with `validator` derive attributes. `validator` collects
//! every violation into a map, so callers pick the first violated field in
//! declaration order to report a single reason.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::error::{DomainError, DomainResult};

/// Build a `ValidationError` carrying a client-facing message.
pub(crate) fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Reject empty and whitespace-only strings.
pub(crate) fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Compare field names ignoring case and underscores, so serde renames
/// (`release_date` / `releaseDate`) resolve to the same field.
fn same_field(key: &str, field: &str) -> bool {
    let normalize = |name: &str| {
        name.chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect::<String>()
    };
    normalize(key) == normalize(field)
}

/// Message of the first violated field, walking `fields` in order.
pub(crate) fn first_violation(errors: &ValidationErrors, fields: &[&str]) -> Option<String> {
    let by_field = errors.field_errors();
    fields.iter().find_map(|field| {
        by_field
            .iter()
            .find(|(key, _)| same_field(&key.to_string(), field))
            .and_then(|(_, errors)| errors.first())
            .map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| error.code.to_string())
            })
    })
}

/// Fail with the first violated field among `fields`, ignoring the others.
pub(crate) fn reject_first(
    outcome: &Result<(), ValidationErrors>,
    fields: &[&str],
) -> DomainResult<()> {
    match outcome {
        Err(errors) => match first_violation(errors, fields) {
            Some(message) => Err(DomainError::validation(message)),
            None => Ok(()),
        },
        Ok(()) => Ok(()),
    }
}
