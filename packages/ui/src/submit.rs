//! # Submission flows
//!
//! One async function per form. Each validates the form, and only if every
//! rule passes makes exactly one backend call through [`AuthApi`]. The result is
//! a [`Submission`]:
//!
//! - [`Submission::Invalid`]: a rule failed, nothing was sent.
//! - [`Submission::Succeeded`]: the call succeeded; effects of the success path.
//! - [`Submission::Failed`]: the call failed; an error toast and nothing else.
//!
//! Field values are only reset on success, so a failed submission can be
//! corrected and sent again.

use std::future::Future;

use api::*;
use cache::QueryKey;
use tracing::{debug, info, warn};

use crate::effects::{Effect, Toast};
use crate::routes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Invalid(FieldErrors),
    Succeeded(Vec<Effect>),
    Failed(Vec<Effect>),
}

impl Submission {
    /// Field errors to render inline; empty unless validation failed.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Submission::Invalid(errors) => errors.clone(),
            _ => FieldErrors::new(),
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Submission::Succeeded(_))
    }

    pub fn into_effects(self) -> Vec<Effect> {
        match self {
            Submission::Invalid(_) => Vec::new(),
            Submission::Succeeded(effects) | Submission::Failed(effects) => effects,
        }
    }
}

async fn run<F, Fut>(
    action: &str,
    errors: FieldErrors,
    call: F,
    on_success: impl FnOnce(String) -> Vec<Effect>,
) -> Submission
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, ApiError>>,
{
    if !errors.is_empty() {
        debug!("{}: {} field error(s), not submitting", action, errors.len());
        return Submission::Invalid(errors);
    }

    match call().await {
        Ok(message) => {
            info!("{}: succeeded", action);
            Submission::Succeeded(on_success(message))
        }
        Err(e) => {
            warn!("{}: {}", action, e.detail());
            Submission::Failed(vec![Effect::Toast(Toast::error(e.message()))])
        }
    }
}

/// Client-side sign out: the cached user belongs to the old session.
pub fn logout() -> Vec<Effect> {
    vec![
        Effect::Forget(QueryKey::user()),
        Effect::Navigate(routes::LOGIN),
    ]
}

/// Profile edit. Success also invalidates the cached current user.
pub async fn update_profile(api: &impl AuthApi, form: &UserProfileFormData) -> Submission {
    run(
        "update profile",
        form.validate(),
        || api.update_profile(form),
        |message| {
            vec![
                Effect::Toast(Toast::success(message)),
                Effect::Invalidate(QueryKey::user()),
            ]
        },
    )
    .await
}

/// Password change for the signed-in user.
pub async fn change_password(
    api: &impl AuthApi,
    form: &UpdateCurrentPasswordFormData,
) -> Submission {
    run(
        "change password",
        form.validate(),
        || api.change_password(form),
        |message| vec![Effect::Toast(Toast::success(message))],
    )
    .await
}

/// New password from the reset flow. Success resets the fields and sends the
/// user to the login screen, after the toast.
pub async fn reset_password(
    api: &impl AuthApi,
    token: &str,
    form: &NewPasswordFormData,
) -> Submission {
    let request = form.clone().with_token(token);
    run(
        "reset password",
        form.validate(),
        || api.update_password_with_token(&request),
        |message| {
            vec![
                Effect::Toast(Toast::success(message)),
                Effect::ResetForm,
                Effect::Navigate(routes::LOGIN),
            ]
        },
    )
    .await
}

/// Account confirmation with a completed one-time code.
pub async fn confirm_account(api: &impl AuthApi, token: &str) -> Submission {
    let form = ConfirmTokenFormData {
        token: token.to_string(),
    };
    run(
        "confirm account",
        FieldErrors::new(),
        || api.confirm_account(&form),
        |message| vec![Effect::Toast(Toast::success(message))],
    )
    .await
}

/// First step of the reset flow: check the emailed token.
pub async fn validate_reset_token(api: &impl AuthApi, token: &str) -> Submission {
    let form = ConfirmTokenFormData {
        token: token.to_string(),
    };
    run(
        "validate token",
        FieldErrors::new(),
        || api.validate_token(&form),
        |message| vec![Effect::Toast(Toast::success(message))],
    )
    .await
}

/// Sign in. Any user cached from an earlier session is dropped so the next
/// read fetches the account that just logged in.
pub async fn login(api: &impl AuthApi, form: &LoginFormData) -> Submission {
    run(
        "login",
        form.validate(),
        || api.login(form),
        |_token| {
            vec![
                Effect::Forget(QueryKey::user()),
                Effect::Navigate(routes::HOME),
            ]
        },
    )
    .await
}

pub async fn register(api: &impl AuthApi, form: &RegisterFormData) -> Submission {
    run(
        "register",
        form.validate(),
        || api.create_account(form),
        |message| vec![Effect::Toast(Toast::success(message)), Effect::ResetForm],
    )
    .await
}

pub async fn request_code(api: &impl AuthApi, form: &RequestConfirmationFormData) -> Submission {
    run(
        "request code",
        form.validate(),
        || api.request_confirmation_code(form),
        |message| vec![Effect::Toast(Toast::success(message)), Effect::ResetForm],
    )
    .await
}

pub async fn forgot_password(api: &impl AuthApi, form: &ForgotPasswordFormData) -> Submission {
    run(
        "forgot password",
        form.validate(),
        || api.forgot_password(form),
        |message| vec![Effect::Toast(Toast::success(message)), Effect::ResetForm],
    )
    .await
}
