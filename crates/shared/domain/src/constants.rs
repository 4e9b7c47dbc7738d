//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier value meaning "no identifier assigned yet"
pub const UNASSIGNED_ID: i64 = 0;

/// First identifier handed out by an empty user store
pub const FIRST_USER_ID: i64 = 1;

// =============================================================================
// Film validation
// =============================================================================

/// Maximum film description length, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Year of the first public film screening
pub const CINEMA_BIRTH_YEAR: i32 = 1895;

/// Month of the first public film screening
pub const CINEMA_BIRTH_MONTH: u32 = 12;

/// Day of the first public film screening
pub const CINEMA_BIRTH_DAY: u32 = 28;

pub const MSG_FILM_NAME_EMPTY: &str = "Film name must not be empty";
pub const MSG_FILM_DESCRIPTION_TOO_LONG: &str = "Film description must be at most 200 characters";
pub const MSG_FILM_RELEASE_TOO_EARLY: &str =
    "Film release date must not be before 28 December 1895";
pub const MSG_FILM_DURATION_NOT_POSITIVE: &str = "Film duration must be a positive number";
pub const MSG_FILM_ID_REQUIRED: &str = "Film ID must be specified";

// =============================================================================
// User validation
// =============================================================================

/// Character every email address must contain
pub const EMAIL_MARKER: &str = "@";

pub const MSG_USER_EMAIL_INVALID: &str = "Email must not be empty and must contain '@'";
pub const MSG_USER_LOGIN_INVALID: &str = "Login must not be empty or contain spaces";
pub const MSG_USER_BIRTHDAY_IN_FUTURE: &str = "Birthday must not be in the future";
pub const MSG_USER_ID_REQUIRED: &str = "User ID must be specified";
