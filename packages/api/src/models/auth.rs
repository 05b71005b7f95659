//! Credential payloads for the authentication flows.
//!
//! These only live for the duration of a submit call and are never stored.

use serde::{Deserialize, Serialize};

use crate::validation::{rules, FieldErrors, Validate};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

impl Validate for LoginFormData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        email_field(&mut errors, &self.email);
        if !rules::required(&self.password) {
            errors.add("password", "Password is required");
        }
        errors
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterFormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl Validate for RegisterFormData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !rules::required(&self.name) {
            errors.add("name", "Name is required");
        }
        email_field(&mut errors, &self.email);
        rules::new_password(
            &mut errors,
            &self.password,
            &self.password_confirmation,
            "Password is required",
            "Please repeat the password",
        );
        errors
    }
}

/// Six-digit token sent by email, used for account confirmation and resets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfirmTokenFormData {
    pub token: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestConfirmationFormData {
    pub email: String,
}

impl Validate for RequestConfirmationFormData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        email_field(&mut errors, &self.email);
        errors
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordFormData {
    pub email: String,
}

impl Validate for ForgotPasswordFormData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        email_field(&mut errors, &self.email);
        errors
    }
}

/// New password chosen during the reset flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPasswordFormData {
    pub password: String,
    pub password_confirmation: String,
}

impl NewPasswordFormData {
    /// Attach the reset token for `POST /auth/update-password`.
    pub fn with_token(self, token: impl Into<String>) -> NewPasswordRequest {
        NewPasswordRequest {
            password: self.password,
            password_confirmation: self.password_confirmation,
            token: token.into(),
        }
    }
}

impl Validate for NewPasswordFormData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        rules::new_password(
            &mut errors,
            &self.password,
            &self.password_confirmation,
            "Password is required",
            "Please repeat the password",
        );
        errors
    }
}

/// Body of the token-based password reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPasswordRequest {
    pub password: String,
    pub password_confirmation: String,
    pub token: String,
}

/// Password change for a signed-in user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCurrentPasswordFormData {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl Validate for UpdateCurrentPasswordFormData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !rules::required(&self.current_password) {
            errors.add("current_password", "Current password is required");
        }
        rules::new_password(
            &mut errors,
            &self.password,
            &self.password_confirmation,
            "New password is required",
            "This field is required",
        );
        errors
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckPasswordFormData {
    pub password: String,
}

impl Validate for CheckPasswordFormData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !rules::required(&self.password) {
            errors.add("password", "Password is required");
        }
        errors
    }
}

fn email_field(errors: &mut FieldErrors, email: &str) {
    if !rules::required(email) {
        errors.add("email", "Email is required");
    } else if !rules::is_email(email) {
        errors.add("email", "Invalid email");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_password(password: &str, confirmation: &str) -> NewPasswordFormData {
        NewPasswordFormData {
            password: password.to_string(),
            password_confirmation: confirmation.to_string(),
        }
    }

    fn change_password(password: &str, confirmation: &str) -> UpdateCurrentPasswordFormData {
        UpdateCurrentPasswordFormData {
            current_password: "old-secret".to_string(),
            password: password.to_string(),
            password_confirmation: confirmation.to_string(),
        }
    }

    #[test]
    fn test_new_password_examples() {
        let errors = new_password("abcd123", "abcd123").validate();
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );

        let errors = new_password("abcd1234", "abcd1235").validate();
        assert_eq!(
            errors.get("password_confirmation"),
            Some("Passwords do not match")
        );

        assert!(new_password("abcd1234", "abcd1234").validate().is_empty());
    }

    #[test]
    fn test_change_password_examples() {
        assert!(change_password("abcd123", "abcd123")
            .validate()
            .get("password")
            .is_some());
        assert_eq!(
            change_password("abcd1234", "abcd1235")
                .validate()
                .get("password_confirmation"),
            Some("Passwords do not match")
        );
        assert!(change_password("abcd1234", "abcd1234").validate().is_empty());

        let mut form = change_password("abcd1234", "abcd1234");
        form.current_password.clear();
        assert_eq!(
            form.validate().get("current_password"),
            Some("Current password is required")
        );
    }

    #[test]
    fn test_change_password_messages() {
        let errors = UpdateCurrentPasswordFormData::default().validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("password"), Some("New password is required"));
        assert_eq!(
            errors.get("password_confirmation"),
            Some("This field is required")
        );
    }

    #[test]
    fn test_register_validation() {
        let form = RegisterFormData {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "abcd1234".to_string(),
            password_confirmation: "abcd1234".to_string(),
        };
        assert!(form.validate().is_empty());

        let form = RegisterFormData {
            email: "ana".to_string(),
            ..form
        };
        assert_eq!(form.validate().get("email"), Some("Invalid email"));
    }

    #[test]
    fn test_reset_request_carries_token() {
        let request = new_password("abcd1234", "abcd1234").with_token("123456");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["token"], "123456");
        assert_eq!(json["password_confirmation"], "abcd1234");
    }

    #[test]
    fn test_email_only_forms() {
        assert!(ForgotPasswordFormData::default().validate().get("email").is_some());
        assert!(RequestConfirmationFormData {
            email: "ana@example.com".to_string()
        }
        .validate()
        .is_empty());
        assert!(LoginFormData::default().validate().get("password").is_some());
    }
}
