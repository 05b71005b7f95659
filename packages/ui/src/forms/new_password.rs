use api::{FieldErrors, NewPasswordFormData};
use dioxus::prelude::*;

use super::field_error;
use crate::components::{Button, ButtonVariant, FormField, Input};
use crate::feedback::use_feedback;
use crate::session::use_api;
use crate::submit;

/// Second step of the reset flow: choose a new password for a validated token.
#[component]
pub fn NewPasswordForm(token: String) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut password = use_signal(String::new);
    let mut password_confirmation = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        let api = api.clone();
        let token = token.clone();
        let form = NewPasswordFormData {
            password: password(),
            password_confirmation: password_confirmation(),
        };
        spawn(async move {
            let outcome = submit::reset_password(&api, &token, &form).await;
            errors.set(outcome.field_errors());
            feedback.apply(outcome.into_effects(), || {
                password.set(String::new());
                password_confirmation.set(String::new());
            });
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "space-y-8 p-10 mt-10 bg-white",
            novalidate: true,
            onsubmit: handle_submit,

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
                if submitting() { "Saving..." } else { "Set password" }
            }
        }
    }
}
