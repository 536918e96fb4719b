//! User domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::age::age;
use crate::config::DATE_FORMAT;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(value_type = String, format = Date, example = "1990-01-01")]
    pub date_of_birth: NaiveDate,
}

/// Read-side projection of a user with the age derived at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserView {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "1990-01-01")]
    pub date_of_birth: String,
    #[schema(example = 34)]
    pub age: i32,
}

impl UserView {
    /// Project a stored user as seen on `today`.
    pub fn from_user(user: User, today: NaiveDate) -> Self {
        Self {
            id: user.id,
            age: age(user.date_of_birth, today),
            date_of_birth: user.date_of_birth.format(DATE_FORMAT).to_string(),
            name: user.name,
        }
    }
}

/// Raw create/update payload, exactly as received.
///
/// Missing and `null` fields deserialize as empty strings so that they
/// surface as `required` violations instead of body parse failures.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserInput {
    /// Letters and spaces, at least two characters
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Date in `YYYY-MM-DD` format (also accepted as `dob`)
    #[serde(default, alias = "dob", deserialize_with = "null_as_empty")]
    #[schema(example = "1990-01-01")]
    pub date_of_birth: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, date_of_birth: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date_of_birth: date_of_birth.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A validated write: what the store receives on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub date_of_birth: NaiveDate,
}
