//! Test doubles shared by the flow and pin input tests.

use std::cell::RefCell;

use api::*;
use cache::{QueryCache, QueryKey};

use crate::effects::{EffectSink, Toast, ToastLevel};

/// [`AuthApi`] that records every call and answers with a canned result.
#[derive(Default)]
pub struct MockApi {
    pub calls: RefCell<Vec<&'static str>>,
    pub tokens: RefCell<Vec<String>>,
    pub fail_with: Option<ApiError>,
}

impl MockApi {
    pub fn failing(err: ApiError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn reply(&self, op: &'static str, message: &str) -> Result<String, ApiError> {
        self.calls.borrow_mut().push(op);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(message.to_string()),
        }
    }
}

impl AuthApi for MockApi {
    async fn create_account(&self, _: &RegisterFormData) -> Result<String, ApiError> {
        self.reply("create_account", "Account created, check your email")
    }

    async fn confirm_account(&self, form: &ConfirmTokenFormData) -> Result<String, ApiError> {
        self.tokens.borrow_mut().push(form.token.clone());
        self.reply("confirm_account", "Account confirmed")
    }

    async fn login(&self, _: &LoginFormData) -> Result<String, ApiError> {
        self.reply("login", "token")
    }

    async fn request_confirmation_code(
        &self,
        _: &RequestConfirmationFormData,
    ) -> Result<String, ApiError> {
        self.reply("request_confirmation_code", "New code sent")
    }

    async fn forgot_password(&self, _: &ForgotPasswordFormData) -> Result<String, ApiError> {
        self.reply("forgot_password", "Check your email")
    }

    async fn validate_token(&self, form: &ConfirmTokenFormData) -> Result<String, ApiError> {
        self.tokens.borrow_mut().push(form.token.clone());
        self.reply("validate_token", "Valid token")
    }

    async fn update_password_with_token(
        &self,
        request: &NewPasswordRequest,
    ) -> Result<String, ApiError> {
        self.tokens.borrow_mut().push(request.token.clone());
        self.reply("update_password_with_token", "Password updated")
    }

    async fn get_user(&self) -> Result<User, ApiError> {
        self.reply("get_user", "")?;
        Ok(User {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        })
    }

    async fn update_profile(&self, _: &UserProfileFormData) -> Result<String, ApiError> {
        self.reply("update_profile", "Profile updated")
    }

    async fn change_password(&self, _: &UpdateCurrentPasswordFormData) -> Result<String, ApiError> {
        self.reply("change_password", "Password updated")
    }

    async fn check_password(&self, _: &CheckPasswordFormData) -> Result<String, ApiError> {
        self.reply("check_password", "Correct password")
    }
}

/// [`EffectSink`] that applies invalidations to a real cache and logs the rest.
#[derive(Default)]
pub struct RecordingSink {
    pub cache: QueryCache,
    pub events: Vec<String>,
}

impl EffectSink for RecordingSink {
    fn toast(&mut self, toast: Toast) {
        let level = match toast.level {
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
        };
        self.events.push(format!("toast:{level}:{}", toast.message));
    }

    fn invalidate(&mut self, key: &QueryKey) {
        self.cache.invalidate(key);
        self.events.push(format!("invalidate:{key}"));
    }

    fn forget(&mut self, key: &QueryKey) {
        self.cache.remove(key);
        self.events.push(format!("forget:{key}"));
    }

    fn navigate(&mut self, to: &'static str) {
        self.events.push(format!("navigate:{to}"));
    }

    fn reset(&mut self) {
        self.events.push("reset".to_string());
    }
}
