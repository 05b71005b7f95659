use dioxus::prelude::*;

use super::frame::AuthLinks;
use crate::feedback::use_feedback;
use crate::pin_input::{PinCode, PinInput};
use crate::session::use_api;
use crate::{routes, submit};

/// Account confirmation with the 6-digit code from the welcome email.
///
/// The code is sent as soon as the sixth digit is entered. A rejected code
/// only shows an error toast, so it can be corrected in place.
#[component]
pub fn ConfirmAccountView() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let code = use_signal(PinCode::default);
    let mut confirmed = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let handle_complete = move |token: String| {
        submitting.set(true);
        let api = api.clone();
        spawn(async move {
            let outcome = submit::confirm_account(&api, &token).await;
            if outcome.succeeded() {
                confirmed.set(true);
            }
            feedback.apply(outcome.into_effects(), || {});
            submitting.set(false);
        });
    };

    rsx! {
        h1 { class: "text-5xl font-black text-white", "Confirm your account" }
        p {
            class: "text-2xl font-light text-white mt-5",
            "Enter the code you received "
            span { class: "text-fuchsia-500 font-bold", "by email" }
        }

        div {
            class: "space-y-8 p-10 bg-white mt-10",
            label {
                class: "block text-2xl text-center font-bold",
                "6-digit code"
            }
            PinInput {
                id: "confirm",
                code,
                disabled: submitting(),
                on_complete: handle_complete,
            }
            if confirmed() {
                p {
                    class: "text-center",
                    "Account confirmed. "
                    Link {
                        to: routes::LOGIN,
                        class: "text-fuchsia-600 font-bold",
                        "Log in"
                    }
                }
            }
        }

        AuthLinks {
            links: vec![(routes::REQUEST_CODE, "Request a new code")],
        }
    }
}
