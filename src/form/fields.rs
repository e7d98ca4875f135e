//! Field identity and per-field validation rules.

use crate::validation::{is_required_present, is_valid_email, is_valid_phone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The five inputs of the contact form.
///
/// Using an enum instead of raw field names makes "the field must be one
/// of the known five" a compile-time guarantee rather than a runtime
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactField {
    /// All fields in display order.
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Service,
        ContactField::Message,
    ];

    /// Stable identifier used in snapshots and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Service => "service",
            ContactField::Message => "message",
        }
    }

    /// Message shown next to the input when validation fails.
    pub fn error_message(&self) -> &'static str {
        match self {
            ContactField::Name => "Name is required",
            ContactField::Email => "Please enter a valid email address",
            ContactField::Phone => "Please enter a valid phone number",
            ContactField::Service => "Please select a service",
            ContactField::Message => "Message is required",
        }
    }

    /// Run this field's validator against a raw value.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            ContactField::Name | ContactField::Service | ContactField::Message => {
                is_required_present(value)
            }
            ContactField::Email => is_valid_email(value),
            ContactField::Phone => is_valid_phone(value),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current raw values of the five fields. Everything starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl FieldValues {
    /// Read one field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    /// Write one field.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Service => self.service = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Validate every field, collecting the fixed message for each failure.
    /// The result is a complete recomputation, never an incremental merge.
    pub fn validate(&self) -> HashMap<ContactField, String> {
        ContactField::ALL
            .iter()
            .filter(|field| !field.accepts(self.get(**field)))
            .map(|field| (*field, field.error_message().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FieldValues {
        FieldValues {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            service: "laundry".to_string(),
            message: "Weekly pickup please".to_string(),
        }
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut values = FieldValues::default();
        for field in ContactField::ALL {
            assert_eq!(values.get(field), "");
        }
        values.set(ContactField::Email, "a@b.com");
        assert_eq!(values.get(ContactField::Email), "a@b.com");
        assert_eq!(values.get(ContactField::Name), "");
    }

    #[test]
    fn test_validate_accepts_filled_form() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_every_empty_field() {
        let errors = FieldValues::default().validate();
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.get(&ContactField::Name).map(String::as_str),
            Some("Name is required")
        );
        assert_eq!(
            errors.get(&ContactField::Email).map(String::as_str),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_validate_flags_exactly_the_offending_field() {
        for field in ContactField::ALL {
            let mut values = filled();
            values.set(field, "");
            let errors = values.validate();
            assert_eq!(errors.len(), 1, "only {field} should fail");
            assert!(errors.contains_key(&field));
        }
    }

    #[test]
    fn test_whitespace_only_is_not_present() {
        let mut values = filled();
        values.set(ContactField::Message, "   ");
        assert!(values.validate().contains_key(&ContactField::Message));
    }

    #[test]
    fn test_malformed_email_and_phone_are_flagged() {
        let mut values = filled();
        values.set(ContactField::Email, "not-an-email");
        values.set(ContactField::Phone, "12345");
        let errors = values.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key(&ContactField::Email));
        assert!(errors.contains_key(&ContactField::Phone));
    }

    #[test]
    fn test_field_identifiers_are_stable() {
        let ids: Vec<&str> = ContactField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(ids, vec!["name", "email", "phone", "service", "message"]);
    }
}
