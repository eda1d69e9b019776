//! Field validation for the add-user form.
//!
//! Nothing here fails: a problem with the input is reported as an entry in
//! an [`ErrorMap`], never as an `Err`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{FormField, FormRecord};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const WEBSITE_INVALID: &str = "Website should start with http:// or https://";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Fields that must contain something other than whitespace.
const REQUIRED_FIELDS: [FormField; 7] = [
    FormField::Name,
    FormField::Username,
    FormField::Phone,
    FormField::Street,
    FormField::City,
    FormField::Zipcode,
    FormField::CompanyName,
];

/// Validation messages keyed by form field, in form order.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FormField, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FormField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Result of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: ErrorMap,
}

pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn validate_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// An empty website is fine since the field is optional. Whitespace is not
/// empty, so `"   "` fails the scheme check.
pub fn validate_website(value: &str) -> bool {
    value.is_empty() || value.starts_with("http://") || value.starts_with("https://")
}

/// Only the exact empty string counts as missing; whitespace-only input is
/// reported as badly formed.
pub fn email_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !validate_email(value) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

pub fn website_error(value: &str) -> Option<&'static str> {
    if value.is_empty() || validate_website(value) {
        None
    } else {
        Some(WEBSITE_INVALID)
    }
}

/// Check every validated field of `record`. Suite, catch phrase and
/// business are never checked.
pub fn validate_form_record(record: &FormRecord) -> ValidationOutcome {
    let mut errors = ErrorMap::new();

    for field in REQUIRED_FIELDS {
        if !validate_required(record.get(field)) {
            errors.insert(field, format!("{} is required", field.label()));
        }
    }

    if let Some(msg) = email_error(&record.email) {
        errors.insert(FormField::Email, msg);
    }

    if let Some(msg) = website_error(&record.website) {
        errors.insert(FormField::Website, msg);
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Error state of a form being filled in.
#[derive(Debug, Default)]
pub struct FormValidation {
    errors: ErrorMap,
}

impl FormValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Replace the current errors with a fresh pass over `record`.
    pub fn validate_form(&mut self, record: &FormRecord) -> bool {
        let outcome = validate_form_record(record);
        self.errors = outcome.errors;
        outcome.is_valid
    }

    /// Drop the error for a field the user just edited.
    pub fn clear_error(&mut self, field: FormField) {
        self.errors.remove(field);
    }

    pub fn set_error(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message);
    }

    pub fn clear_all_errors(&mut self) {
        self.errors = ErrorMap::new();
    }
}
