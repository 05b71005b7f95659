use api::{FieldErrors, LoginFormData};
use dioxus::prelude::*;

use super::frame::AuthLinks;
use crate::components::{Button, ButtonVariant, FormField, Input};
use crate::feedback::use_feedback;
use crate::forms::field_error;
use crate::session::use_api;
use crate::{routes, submit};

#[component]
pub fn LoginView() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        let api = api.clone();
        let form = LoginFormData {
            email: email().trim().to_string(),
            password: password(),
        };
        spawn(async move {
            let outcome = submit::login(&api, &form).await;
            errors.set(outcome.field_errors());
            feedback.apply(outcome.into_effects(), || {});
            submitting.set(false);
        });
    };

    rsx! {
        h1 { class: "text-5xl font-black text-white", "Log in" }
        p {
            class: "text-2xl font-light text-white mt-5",
            "Start planning your projects by "
            span { class: "text-fuchsia-500 font-bold", "logging in" }
        }

        form {
            class: "space-y-8 p-10 mt-10 bg-white",
            novalidate: true,
            onsubmit: handle_login,

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

            FormField {
                id: "password",
                label: "Password",
                error: field_error(errors, "password"),
                Input {
                    id: "password",
                    class: "w-full",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    invalid: field_error(errors, "password").is_some(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Logging in..." } else { "Log in" }
            }
        }

        AuthLinks {
            links: vec![
                (routes::REGISTER, "Don't have an account? Create one"),
                (routes::FORGOT_PASSWORD, "Forgot your password? Reset it"),
            ],
        }
    }
}
