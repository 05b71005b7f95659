//! # Client-side field validation
//!
//! Every form data type implements [`Validate`], a pure function from the
//! current field values to a set of [`FieldError`]s. Forms call it before any
//! network action and only submit when the returned [`FieldErrors`] is empty.
//!
//! The building blocks in [`rules`] mirror the constraints the backend enforces
//! (required fields, minimum password length, email shape, confirmation
//! equality) so most mistakes are caught without a round-trip.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// A validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Ordered set of field errors; at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. The first error recorded for a field wins.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        if self.get(field).is_none() {
            self.0.push(FieldError { field, message });
        }
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

/// A form whose values can be checked before submission.
pub trait Validate {
    fn validate(&self) -> FieldErrors;
}

pub mod rules {
    use super::*;

    static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid")
    });

    /// Value is non-empty.
    pub fn required(value: &str) -> bool {
        !value.is_empty()
    }

    /// Value has at least `min` characters.
    pub fn min_length(value: &str, min: usize) -> bool {
        value.chars().count() >= min
    }

    /// Value contains a `local@domain.tld` shaped address.
    pub fn is_email(value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }

    /// Shared checks for a new password and its confirmation.
    ///
    /// `required_msg` lets each form keep its own wording for the empty case.
    pub fn new_password(
        errors: &mut FieldErrors,
        password: &str,
        confirmation: &str,
        required_msg: &'static str,
        confirmation_required_msg: &'static str,
    ) {
        if !required(password) {
            errors.add("password", required_msg);
        } else if !min_length(password, PASSWORD_MIN_LEN) {
            errors.add("password", "Password must be at least 8 characters");
        }

        if !required(confirmation) {
            errors.add("password_confirmation", confirmation_required_msg);
        } else if confirmation != password {
            errors.add("password_confirmation", "Passwords do not match");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Invalid email");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn test_min_length_counts_characters() {
        assert!(rules::min_length("contraseña", 10));
        assert!(!rules::min_length("ñññññññ", 8));
        assert!(rules::min_length("abcd1234", PASSWORD_MIN_LEN));
        assert!(!rules::min_length("abcd123", PASSWORD_MIN_LEN));
    }

    #[test]
    fn test_new_password_rules() {
        let mut errors = FieldErrors::new();
        rules::new_password(&mut errors, "abcd1234", "abcd1235", "req", "req2");
        assert_eq!(errors.get("password"), None);
        assert_eq!(errors.get("password_confirmation"), Some("Passwords do not match"));

        let mut errors = FieldErrors::new();
        rules::new_password(&mut errors, "", "", "req", "req2");
        assert_eq!(errors.get("password"), Some("req"));
        assert_eq!(errors.get("password_confirmation"), Some("req2"));
    }
}
