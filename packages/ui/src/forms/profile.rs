use api::{FieldErrors, User, UserProfileFormData};
use dioxus::prelude::*;

use super::field_error;
use crate::components::{Button, ButtonVariant, FormField, Input};
use crate::feedback::use_feedback;
use crate::session::use_api;
use crate::submit;

/// Name and email of the signed-in user, seeded from `user`.
#[component]
pub fn ProfileForm(user: User) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let initial = user.to_profile_form();
    let mut name = use_signal(|| initial.name.clone());
    let mut email = use_signal(|| initial.email.clone());
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        let api = api.clone();
        let form = UserProfileFormData {
            name: name(),
            email: email(),
        };
        spawn(async move {
            let outcome = submit::update_profile(&api, &form).await;
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
                id: "email",
                label: "Email",
                error: field_error(errors, "email"),
                Input {
                    id: "email",
                    class: "w-full",
                    r#type: "email",
                    placeholder: "Your email",
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
                if submitting() { "Saving..." } else { "Save changes" }
            }
        }
    }
}
