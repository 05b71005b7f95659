//! # User model
//!
//! Defines the two representations of an UpTask user on the client:
//!
//! ## [`User`]
//!
//! The record returned by `GET /auth/user`. The backend names the identifier
//! `_id`; it is exposed here as `id`. Users are never created client-side, only
//! fetched, displayed and edited through the profile form.
//!
//! ## [`UserProfileFormData`]
//!
//! The editable subset (`name`, `email`) sent with `PUT /auth/profile`. It is
//! seeded from a [`User`] via [`User::to_profile_form`] so the form starts with
//! the current values.

use serde::{Deserialize, Serialize};

use crate::validation::{rules, FieldErrors, Validate};

/// Authenticated user as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Project into the profile form's initial values.
    pub fn to_profile_form(&self) -> UserProfileFormData {
        UserProfileFormData {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Profile fields editable by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfileFormData {
    pub name: String,
    pub email: String,
}

impl Validate for UserProfileFormData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !rules::required(&self.name) {
            errors.add("name", "Name is required");
        }
        if !rules::required(&self.email) {
            errors.add("email", "Email is required");
        } else if !rules::is_email(&self.email) {
            errors.add("email", "Invalid email");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_backend_json() {
        let user: User = serde_json::from_str(
            r#"{"_id":"65f1c0ffee","name":"Ana","email":"ana@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "65f1c0ffee");
        assert_eq!(user.to_profile_form().email, "ana@example.com");
    }

    #[test]
    fn test_profile_email_shape() {
        let mut form = UserProfileFormData {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        };
        assert!(form.validate().is_empty());

        for bad in ["ana", "ana@example", "@example.com", "ana@.com x", "ana @example.com"] {
            form.email = bad.to_string();
            let errors = form.validate();
            assert_eq!(errors.get("email"), Some("Invalid email"), "{bad}");
        }
    }

    #[test]
    fn test_profile_required_fields() {
        let errors = UserProfileFormData::default().validate();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
    }
}
