//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Contains: the user entity and its read projection, input validation,
//! and age derivation.

pub mod age;
pub mod user;
pub mod validation;

pub use age::age;
pub use user::{NewUser, User, UserInput, UserView};
pub use validation::{message_for, parse_date, FieldError};
