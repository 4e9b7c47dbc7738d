//! Domain layer - Core entities and their validation rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Films and users are shared by the store services and the HTTP gateway.

pub mod constants;
pub mod error;
pub mod film;
pub mod serde_helpers;
pub mod user;
mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use film::{cinema_birth_date, Film};
pub use user::User;
