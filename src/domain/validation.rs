//! Input validation for user writes.
//!
//! Rules run per field in a fixed order and every violation is collected.
//! A field that fails `required` is not checked further. Violations are
//! reported through `validator`'s [`ValidationErrors`] and flattened into
//! ordered [`FieldError`]s for responses.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use super::user::{NewUser, UserInput};
use crate::config::{
    DATE_FORMAT, MIN_NAME_LENGTH, RULE_ALPHASPACE, RULE_DATETIME, RULE_MIN, RULE_REQUIRED,
};

/// One failed rule on one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "name")]
    pub field: String,
    #[serde(rename = "msg")]
    #[schema(example = "This field is required")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, rule: &str) -> Self {
        Self {
            field: field.into(),
            message: message_for(rule),
        }
    }

    /// Flatten `errors` in the order given by `fields`.
    pub fn collect(errors: &ValidationErrors, fields: &[&'static str]) -> Vec<FieldError> {
        let by_field = errors.field_errors();
        fields
            .iter()
            .filter_map(|field| by_field.get(field).map(|errs| (*field, errs)))
            .flat_map(|(field, errs)| errs.iter().map(move |e| FieldError::new(field, &e.code)))
            .collect()
    }
}

/// Human-readable text for a rule identifier.
pub fn message_for(rule: &str) -> String {
    match rule {
        RULE_REQUIRED => "This field is required".to_string(),
        RULE_ALPHASPACE => "Should contain letters and spaces".to_string(),
        RULE_MIN => "Must have atleast two characters".to_string(),
        RULE_DATETIME => "DOB must in yyyy-mm-dd Format".to_string(),
        other => format!("Field failed on '{}' validation", other),
    }
}

/// Parse a boundary date; only the exact `YYYY-MM-DD` shape is accepted.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let shaped = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

fn name_violations(name: &str) -> Vec<&'static str> {
    if name.trim().is_empty() {
        return vec![RULE_REQUIRED];
    }

    let mut rules = Vec::new();
    if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        rules.push(RULE_ALPHASPACE);
    }
    if name.chars().count() < MIN_NAME_LENGTH {
        rules.push(RULE_MIN);
    }
    rules
}

fn date_of_birth_violations(raw: &str) -> Vec<&'static str> {
    if raw.trim().is_empty() {
        return vec![RULE_REQUIRED];
    }
    if parse_date(raw).is_none() {
        return vec![RULE_DATETIME];
    }
    Vec::new()
}

impl UserInput {
    /// Input fields in reporting order.
    pub const FIELDS: [&'static str; 2] = ["name", "date_of_birth"];

    /// Validate and convert into a store write.
    pub fn into_new_user(self) -> Result<NewUser, Vec<FieldError>> {
        self.validate()
            .map_err(|errors| FieldError::collect(&errors, &Self::FIELDS))?;

        match parse_date(&self.date_of_birth) {
            Some(date_of_birth) => Ok(NewUser {
                name: self.name,
                date_of_birth,
            }),
            None => Err(vec![FieldError::new("date_of_birth", RULE_DATETIME)]),
        }
    }
}

impl Validate for UserInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for rule in name_violations(&self.name) {
            errors.add("name", ValidationError::new(rule));
        }
        for rule in date_of_birth_violations(&self.date_of_birth) {
            errors.add("date_of_birth", ValidationError::new(rule));
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
