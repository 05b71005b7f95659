//! # REST client for the UpTask backend
//!
//! [`ApiClient`] issues exactly one HTTP request per operation and normalizes
//! every failure into an [`ApiError`]. Operations are exposed through the
//! [`AuthApi`] trait so UI flows can be driven by a test double.
//!
//! | Operation | Route |
//! |-----------|-------|
//! | [`create_account`](AuthApi::create_account) | `POST /auth/create-account` |
//! | [`confirm_account`](AuthApi::confirm_account) | `POST /auth/confirm-account` |
//! | [`login`](AuthApi::login) | `POST /auth/login` |
//! | [`request_confirmation_code`](AuthApi::request_confirmation_code) | `POST /auth/request-code` |
//! | [`forgot_password`](AuthApi::forgot_password) | `POST /auth/forgot-password` |
//! | [`validate_token`](AuthApi::validate_token) | `POST /auth/validate-token` |
//! | [`update_password_with_token`](AuthApi::update_password_with_token) | `POST /auth/update-password` |
//! | [`get_user`](AuthApi::get_user) | `GET /auth/user` |
//! | [`update_profile`](AuthApi::update_profile) | `PUT /auth/profile` |
//! | [`change_password`](AuthApi::change_password) | `POST /auth/update-password` |
//! | [`check_password`](AuthApi::check_password) | `POST /auth/check-password` |
//!
//! Nothing is retried. A failed submission is retried by the user resubmitting.
//!
//! The session token returned by `login` is held in memory and attached as a
//! bearer token to every later request. It is not persisted.

use std::sync::{Arc, RwLock};

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    CheckPasswordFormData, ConfirmTokenFormData, ForgotPasswordFormData, LoginFormData,
    NewPasswordRequest, RegisterFormData, RequestConfirmationFormData,
    UpdateCurrentPasswordFormData, User, UserProfileFormData,
};

/// Backend operations used by the forms and views.
pub trait AuthApi {
    fn create_account(
        &self,
        form: &RegisterFormData,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
    fn confirm_account(
        &self,
        form: &ConfirmTokenFormData,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
    /// On success the returned session token is also stored in the client.
    fn login(
        &self,
        form: &LoginFormData,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
    fn request_confirmation_code(
        &self,
        form: &RequestConfirmationFormData,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
    fn forgot_password(
        &self,
        form: &ForgotPasswordFormData,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
    fn validate_token(
        &self,
        form: &ConfirmTokenFormData,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
    fn update_password_with_token(
        &self,
        request: &NewPasswordRequest,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
    fn get_user(&self) -> impl std::future::Future<Output = Result<User, ApiError>>;
    fn update_profile(
        &self,
        form: &UserProfileFormData,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
    fn change_password(
        &self,
        form: &UpdateCurrentPasswordFormData,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
    fn check_password(
        &self,
        form: &CheckPasswordFormData,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
}

/// HTTP implementation of [`AuthApi`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Current session token, if logged in.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }

    fn request(&self, method: Method, route: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.url(route));
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and decode a JSON success body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        route: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<T, ApiError> {
        let text = self.send(method, route, body).await?;
        serde_json::from_str(&text).map_err(|e| {
            warn!("Undecodable response from {}: {}", route, e);
            ApiError::Unexpected(e.to_string())
        })
    }

    /// Send and return the success message.
    ///
    /// The backend answers with either a plain text body or a JSON string;
    /// both are accepted.
    async fn send_message(
        &self,
        method: Method,
        route: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<String, ApiError> {
        let text = self.send(method, route, Some(body)).await?;
        Ok(serde_json::from_str::<String>(&text).unwrap_or(text))
    }

    async fn send(
        &self,
        method: Method,
        route: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<String, ApiError> {
        debug!("{} {}", method, route);
        let mut builder = self.request(method.clone(), route);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, route, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            Ok(text)
        } else {
            let err = ApiError::from_response(status, &text);
            warn!("{} {} returned {}: {}", method, route, status, err.detail());
            Err(err)
        }
    }
}

impl AuthApi for ApiClient {
    async fn create_account(&self, form: &RegisterFormData) -> Result<String, ApiError> {
        self.send_message(Method::POST, "/auth/create-account", form)
            .await
    }

    async fn confirm_account(&self, form: &ConfirmTokenFormData) -> Result<String, ApiError> {
        self.send_message(Method::POST, "/auth/confirm-account", form)
            .await
    }

    async fn login(&self, form: &LoginFormData) -> Result<String, ApiError> {
        let token = self
            .send_message(Method::POST, "/auth/login", form)
            .await?;
        self.set_token(Some(token.clone()));
        Ok(token)
    }

    async fn request_confirmation_code(
        &self,
        form: &RequestConfirmationFormData,
    ) -> Result<String, ApiError> {
        self.send_message(Method::POST, "/auth/request-code", form)
            .await
    }

    async fn forgot_password(&self, form: &ForgotPasswordFormData) -> Result<String, ApiError> {
        self.send_message(Method::POST, "/auth/forgot-password", form)
            .await
    }

    async fn validate_token(&self, form: &ConfirmTokenFormData) -> Result<String, ApiError> {
        self.send_message(Method::POST, "/auth/validate-token", form)
            .await
    }

    async fn update_password_with_token(
        &self,
        request: &NewPasswordRequest,
    ) -> Result<String, ApiError> {
        self.send_message(Method::POST, "/auth/update-password", request)
            .await
    }

    async fn get_user(&self) -> Result<User, ApiError> {
        self.send_json(Method::GET, "/auth/user", None::<&()>).await
    }

    async fn update_profile(&self, form: &UserProfileFormData) -> Result<String, ApiError> {
        self.send_message(Method::PUT, "/auth/profile", form).await
    }

    async fn change_password(
        &self,
        form: &UpdateCurrentPasswordFormData,
    ) -> Result<String, ApiError> {
        self.send_message(Method::POST, "/auth/update-password", form)
            .await
    }

    async fn check_password(&self, form: &CheckPasswordFormData) -> Result<String, ApiError> {
        self.send_message(Method::POST, "/auth/check-password", form)
            .await
    }
}
