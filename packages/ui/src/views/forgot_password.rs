use api::{FieldErrors, ForgotPasswordFormData};
use dioxus::prelude::*;

use super::frame::AuthLinks;
use crate::components::{Button, ButtonVariant, FormField, Input};
use crate::feedback::use_feedback;
use crate::forms::field_error;
use crate::session::use_api;
use crate::{routes, submit};

#[component]
pub fn ForgotPasswordView() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut email = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let handle_forgot = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        let api = api.clone();
        let form = ForgotPasswordFormData {
            email: email().trim().to_string(),
        };
        spawn(async move {
            let outcome = submit::forgot_password(&api, &form).await;
            errors.set(outcome.field_errors());
            feedback.apply(outcome.into_effects(), || email.set(String::new()));
            submitting.set(false);
        });
    };

    rsx! {
        h1 { class: "text-5xl font-black text-white", "Reset password" }
        p {
            class: "text-2xl font-light text-white mt-5",
            "Forgot your password? Enter your email and "
            span { class: "text-fuchsia-500 font-bold", "reset it" }
        }

        form {
            class: "space-y-8 p-10 rounded-lg bg-white mt-10",
            novalidate: true,
            onsubmit: handle_forgot,

            FormField {
                id: "email",
                label: "Email",
                error: field_error(errors, "email"),
                Input {
                    id: "email",
                    class: "w-full",
                    r#type: "email",
                    placeholder: "Registration email",
                    value: email(),
                    invalid: field_error(errors, "email").is_some(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Sending..." } else { "Send instructions" }
            }
        }

        AuthLinks {
            links: vec![
                (routes::LOGIN, "Already have an account? Log in"),
                (routes::REGISTER, "Don't have an account? Create one"),
            ],
        }
    }
}
