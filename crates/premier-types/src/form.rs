//! Contact form field definitions and validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input type of a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    Textarea,
}

/// One control of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
        }
    }
}

/// An inline, correctable validation state for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} is required.")]
    Required { label: String },

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// The form fields on the site's contact section.
pub fn contact_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", "Full Name", FieldKind::Text, true),
        FieldSpec::new("email", "Email Address", FieldKind::Email, true),
        FieldSpec::new("phone", "Phone Number", FieldKind::Tel, false),
        FieldSpec::new("subject", "Subject", FieldKind::Select, true),
        FieldSpec::new("message", "Message", FieldKind::Textarea, true),
    ]
}
