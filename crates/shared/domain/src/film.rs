//! Film domain entity and its validation rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::{
    CINEMA_BIRTH_DAY, CINEMA_BIRTH_MONTH, CINEMA_BIRTH_YEAR, MSG_FILM_NAME_EMPTY,
    MSG_FILM_RELEASE_TOO_EARLY, UNASSIGNED_ID,
};
use crate::error::DomainResult;
use crate::serde_helpers::null_as_empty;
use crate::validation::{not_blank, reject_first, violation};

/// Field names in the order their rules are reported.
const FILM_RULE_ORDER: &[&str] = &["name", "description", "release_date", "duration"];

/// Date of the first public film screening; nothing can be released earlier.
pub fn cinema_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(CINEMA_BIRTH_YEAR, CINEMA_BIRTH_MONTH, CINEMA_BIRTH_DAY)
        .expect("cinema birth date constants form a valid date")
}

/// Film domain entity.
///
/// The identifier is supplied by the caller; `0` means "not set".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Film {
    /// Film identifier (0 = not assigned)
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Film title
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_film_name"))]
    #[cfg_attr(feature = "openapi", schema(example = "Matrix"))]
    pub name: String,
    /// Optional synopsis, at most 200 characters
    #[serde(default)]
    #[validate(length(max = 200, message = "Film description must be at most 200 characters"))]
    pub description: Option<String>,
    /// Release date, not earlier than 1895-12-28
    #[validate(custom(function = "validate_release_date"))]
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Date, example = "1999-03-31"))]
    pub release_date: NaiveDate,
    /// Running time in minutes
    #[serde(default)]
    #[validate(range(min = 1, message = "Film duration must be a positive number"))]
    #[cfg_attr(feature = "openapi", schema(example = 136))]
    pub duration: i64,
}

impl Film {
    /// Create a film without an identifier
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        release_date: NaiveDate,
        duration: i64,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            description,
            release_date,
            duration,
        }
    }

    /// Set the identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Check if an identifier has been supplied
    pub fn has_id(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    /// Run every film rule, reporting the first one that fails.
    pub fn ensure_valid(&self) -> DomainResult<()> {
        reject_first(&self.validate(), FILM_RULE_ORDER)
    }
}

fn validate_film_name(name: &str) -> Result<(), ValidationError> {
    if not_blank(name) {
        Ok(())
    } else {
        Err(violation("blank_name", MSG_FILM_NAME_EMPTY))
    }
}

fn validate_release_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date < cinema_birth_date() {
        Err(violation("release_too_early", MSG_FILM_RELEASE_TOO_EARLY))
    } else {
        Ok(())
    }
}
