//! Contact form state and validation.
//!
//! Fields validate on blur and clear their error on input. Submission
//! validates everything; the actual send is simulated by the page controller.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use premier_types::form::{contact_fields, FieldError, FieldKind, FieldSpec};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Errors from driving the form itself (not validation states).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<(String, FieldError)>),

    #[error("a submission is already in progress")]
    Busy,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Validate one value against its field. Required is checked before format.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if spec.required && value.is_empty() {
        return Err(FieldError::Required {
            label: spec.label.clone(),
        });
    }
    if spec.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// A validated submission, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub values: BTreeMap<String, String>,
}

/// Live state of the contact form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FieldSpec>,
    values: HashMap<String, String>,
    errors: HashMap<String, FieldError>,
    submitting: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(contact_fields())
    }
}

impl ContactForm {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            values: HashMap::new(),
            errors: HashMap::new(),
            submitting: false,
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn spec(&self, name: &str) -> Result<&FieldSpec, FormError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.errors.get(name)
    }

    /// Record typed input. Clears any error shown on the field; returns
    /// whether one was cleared.
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<bool, FormError> {
        self.spec(name)?;
        self.values.insert(name.to_string(), value.to_string());
        Ok(self.errors.remove(name).is_some())
    }

    /// Validate a field after it loses focus, recording the result.
    pub fn blur(&mut self, name: &str) -> Result<Option<FieldError>, FormError> {
        let spec = self.spec(name)?.clone();
        match validate_field(&spec, self.value(name)) {
            Ok(()) => {
                self.errors.remove(name);
                Ok(None)
            }
            Err(e) => {
                self.errors.insert(name.to_string(), e.clone());
                Ok(Some(e))
            }
        }
    }

    /// Validate every field, recording and returning the failures in field order.
    pub fn validate_all(&mut self) -> Vec<(String, FieldError)> {
        let mut failures = Vec::new();
        for spec in &self.fields {
            let value = self.values.get(&spec.name).map_or("", String::as_str);
            match validate_field(spec, value) {
                Ok(()) => {
                    self.errors.remove(&spec.name);
                }
                Err(e) => {
                    self.errors.insert(spec.name.clone(), e.clone());
                    failures.push((spec.name.clone(), e));
                }
            }
        }
        failures
    }

    /// Start a submission. Fails if any field is invalid or a submission is
    /// already running.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, FormError> {
        if self.submitting {
            return Err(FormError::Busy);
        }
        let failures = self.validate_all();
        if !failures.is_empty() {
            return Err(FormError::Invalid(failures));
        }
        self.submitting = true;
        let values = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), self.value(&f.name).trim().to_string()))
            .collect();
        Ok(ContactSubmission { values })
    }

    /// Finish a submission: clear all values and errors.
    pub fn finish_submit(&mut self) {
        self.reset();
        self.submitting = false;
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}
