use dioxus::prelude::*;

use super::frame::AuthLinks;
use crate::feedback::use_feedback;
use crate::forms::NewPasswordForm;
use crate::pin_input::{PinCode, PinInput};
use crate::session::use_api;
use crate::{routes, submit};

/// Password reset: enter the emailed token, then choose a new password.
#[component]
pub fn NewPasswordView() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let code = use_signal(PinCode::default);
    let mut validated = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_complete = move |token: String| {
        submitting.set(true);
        let api = api.clone();
        spawn(async move {
            let outcome = submit::validate_reset_token(&api, &token).await;
            if outcome.succeeded() {
                validated.set(Some(token));
            }
            feedback.apply(outcome.into_effects(), || {});
            submitting.set(false);
        });
    };

    rsx! {
        h1 { class: "text-5xl font-black text-white", "Reset password" }
        p {
            class: "text-2xl font-light text-white mt-5",
            "Enter the code you received "
            span { class: "text-fuchsia-500 font-bold", "by email" }
        }

        if let Some(token) = validated() {
            NewPasswordForm { token }
        } else {
            div {
                class: "space-y-8 p-10 bg-white mt-10",
                label {
                    class: "block text-2xl text-center font-bold",
                    "6-digit code"
                }
                PinInput {
                    id: "reset",
                    code,
                    disabled: submitting(),
                    on_complete: handle_complete,
                }
            }
        }

        AuthLinks {
            links: vec![(routes::FORGOT_PASSWORD, "Request a new code")],
        }
    }
}
