//! Validator builder for the fluent validation API.

use std::str::FromStr;

use email_address::EmailAddress;
use regex::Regex;

use super::result::{FieldError, ValidationResult};

/// Builder for validating multiple form fields.
///
/// Rules on a field run in order; the first failing rule supplies the field's
/// error message and later rules are skipped.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to validate.
    pub fn field<'v>(self, name: impl Into<String>, value: &'v str) -> FieldBuilder<'v> {
        FieldBuilder {
            validator: self,
            name: name.into(),
            value,
            error: None,
        }
    }

    /// Finish and collect the result.
    pub fn validate(self) -> ValidationResult {
        if self.errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.errors)
        }
    }
}

/// Rules for a single field; created by [`Validator::field`].
#[derive(Debug)]
pub struct FieldBuilder<'v> {
    validator: Validator,
    name: String,
    value: &'v str,
    error: Option<String>,
}

impl<'v> FieldBuilder<'v> {
    fn rule(mut self, failed: bool, msg: &str) -> Self {
        if self.error.is_none() && failed {
            self.error = Some(msg.to_string());
        }
        self
    }

    /// The value must be non-empty (ignoring surrounding whitespace).
    pub fn required(self, msg: &str) -> Self {
        let failed = self.value.trim().is_empty();
        self.rule(failed, msg)
    }

    /// The value must have at least `min` characters.
    pub fn min_length(self, min: usize, msg: &str) -> Self {
        let failed = self.value.chars().count() < min;
        self.rule(failed, msg)
    }

    /// The value must have at most `max` characters.
    pub fn max_length(self, max: usize, msg: &str) -> Self {
        let failed = self.value.chars().count() > max;
        self.rule(failed, msg)
    }

    /// The value must match the given pattern.
    pub fn pattern(self, re: &Regex, msg: &str) -> Self {
        let failed = !re.is_match(self.value);
        self.rule(failed, msg)
    }

    /// The value must be a syntactically valid email address.
    pub fn email(self, msg: &str) -> Self {
        let failed = EmailAddress::from_str(self.value).is_err();
        self.rule(failed, msg)
    }

    fn finish(mut self) -> Validator {
        if let Some(message) = self.error.take() {
            self.validator.errors.push(FieldError {
                field_name: self.name.clone(),
                message,
            });
        }
        self.validator
    }

    /// Move on to the next field.
    pub fn field<'w>(self, name: impl Into<String>, value: &'w str) -> FieldBuilder<'w> {
        self.finish().field(name, value)
    }

    /// Finish and collect the result.
    pub fn validate(self) -> ValidationResult {
        self.finish().validate()
    }
}
