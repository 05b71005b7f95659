use api::{FieldErrors, RegisterFormData};
use dioxus::prelude::*;

use super::frame::AuthLinks;
use crate::components::{Button, ButtonVariant, FormField, Input};
use crate::feedback::use_feedback;
use crate::forms::field_error;
use crate::session::use_api;
use crate::{routes, submit};

#[component]
pub fn RegisterView() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password_confirmation = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        let api = api.clone();
        let form = RegisterFormData {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            password_confirmation: password_confirmation(),
        };
        spawn(async move {
            let outcome = submit::register(&api, &form).await;
            errors.set(outcome.field_errors());
            feedback.apply(outcome.into_effects(), || {
                name.set(String::new());
                email.set(String::new());
                password.set(String::new());
                password_confirmation.set(String::new());
            });
            submitting.set(false);
        });
    };

    rsx! {
        h1 { class: "text-5xl font-black text-white", "Create account" }
        p {
            class: "text-2xl font-light text-white mt-5",
            "Fill in the form to "
            span { class: "text-fuchsia-500 font-bold", "create your account" }
        }

        form {
            class: "space-y-8 p-10 mt-10 bg-white",
            novalidate: true,
            onsubmit: handle_register,

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
                id: "name",
                label: "Name",
                error: field_error(errors, "name"),
                Input {
                    id: "name",
                    class: "w-full",
                    placeholder: "Your name",
                    value: name(),
                    invalid: field_error(errors, "name").is_some(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
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
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    invalid: field_error(errors, "password").is_some(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            FormField {
                id: "password_confirmation",
                label: "Repeat password",
                error: field_error(errors, "password_confirmation"),
                Input {
                    id: "password_confirmation",
                    class: "w-full",
                    r#type: "password",
                    placeholder: "Repeat the password",
                    value: password_confirmation(),
                    invalid: field_error(errors, "password_confirmation").is_some(),
                    oninput: move |evt: FormEvent| password_confirmation.set(evt.value()),
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Creating account..." } else { "Register" }
            }
        }

        AuthLinks {
            links: vec![
                (routes::LOGIN, "Already have an account? Log in"),
                (routes::FORGOT_PASSWORD, "Forgot your password? Reset it"),
            ],
        }
    }
}
