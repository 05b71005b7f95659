use api::{FieldErrors, UpdateCurrentPasswordFormData};
use dioxus::prelude::*;

use super::field_error;
use crate::components::{Button, ButtonVariant, FormField, Input};
use crate::feedback::use_feedback;
use crate::session::use_api;
use crate::submit;

/// Password change for the signed-in user. Needs the current password.
#[component]
pub fn ChangePasswordForm() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut current_password = use_signal(String::new);
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
        let form = UpdateCurrentPasswordFormData {
            current_password: current_password(),
            password: password(),
            password_confirmation: password_confirmation(),
        };
        spawn(async move {
            let outcome = submit::change_password(&api, &form).await;
            errors.set(outcome.field_errors());
            feedback.apply(outcome.into_effects(), || {});
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "mt-10 space-y-5 bg-white shadow-lg p-10 rounded-lg",
            novalidate: true,
            onsubmit: handle_submit,

            FormField {
                id: "current_password",
                label: "Current password",
                error: field_error(errors, "current_password"),
                Input {
                    id: "current_password",
                    class: "w-full",
                    r#type: "password",
                    placeholder: "Current password",
                    value: current_password(),
                    invalid: field_error(errors, "current_password").is_some(),
                    oninput: move |evt: FormEvent| current_password.set(evt.value()),
                }
            }

            FormField {
                id: "password",
                label: "New password",
                error: field_error(errors, "password"),
                Input {
                    id: "password",
                    class: "w-full",
                    r#type: "password",
                    placeholder: "New password (min 8 characters)",
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
                    placeholder: "Repeat the new password",
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
                if submitting() { "Saving..." } else { "Change password" }
            }
        }
    }
}
