//! User domain entity and related rules.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::{
    EMAIL_MARKER, MSG_USER_BIRTHDAY_IN_FUTURE, MSG_USER_EMAIL_INVALID, MSG_USER_LOGIN_INVALID,
    UNASSIGNED_ID,
};
use crate::error::DomainResult;
use crate::serde_helpers::null_as_empty;
use crate::validation::{not_blank, reject_first, violation};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier (0 = not assigned)
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Email address, must contain '@'
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_email"))]
    #[cfg_attr(feature = "openapi", schema(example = "bob@example.com"))]
    pub email: String,
    /// Login without spaces
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_login"))]
    #[cfg_attr(feature = "openapi", schema(example = "bob"))]
    pub login: String,
    /// Display name, defaults to the login
    #[serde(default, deserialize_with = "null_as_empty")]
    #[cfg_attr(feature = "openapi", schema(example = "Bob"))]
    pub name: String,
    /// Date of birth, not in the future
    #[validate(custom(function = "validate_birthday"))]
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Date, example = "1990-01-01"))]
    pub birthday: NaiveDate,
}

impl User {
    /// Create a user without an identifier
    pub fn new(
        email: impl Into<String>,
        login: impl Into<String>,
        name: impl Into<String>,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            email: email.into(),
            login: login.into(),
            name: name.into(),
            birthday,
        }
    }

    /// Set the identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Check if an identifier has been assigned
    pub fn has_id(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    /// Validate the user, filling a blank display name from the login.
    ///
    /// The name is only filled once email and login have passed.
    pub fn ensure_valid(&mut self) -> DomainResult<()> {
        let outcome = self.validate();
        reject_first(&outcome, &["email", "login"])?;
        if !not_blank(&self.name) {
            self.name = self.login.clone();
        }
        reject_first(&outcome, &["birthday"])
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if not_blank(email) && email.contains(EMAIL_MARKER) {
        Ok(())
    } else {
        Err(violation("invalid_email", MSG_USER_EMAIL_INVALID))
    }
}

fn validate_login(login: &str) -> Result<(), ValidationError> {
    if not_blank(login) && !login.contains(' ') {
        Ok(())
    } else {
        Err(violation("invalid_login", MSG_USER_LOGIN_INVALID))
    }
}

fn validate_birthday(birthday: &NaiveDate) -> Result<(), ValidationError> {
    if *birthday > Local::now().date_naive() {
        Err(violation("birthday_in_future", MSG_USER_BIRTHDAY_IN_FUTURE))
    } else {
        Ok(())
    }
}
