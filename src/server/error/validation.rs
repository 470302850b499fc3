use std::collections::BTreeMap;

use thiserror::Error;

/// Field-level validation failures collected while checking a request.
///
/// Messages are grouped by field name. Errors that concern the request as a whole
/// are stored under [`NON_FIELD_ERRORS`].
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("Invalid input")]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

/// Key used for errors not tied to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding a single message for `field`.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Moves every message of `other` into this set.
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.fields {
            self.fields.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, Vec<String>> {
        self.fields
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
