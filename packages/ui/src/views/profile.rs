use dioxus::prelude::*;

use crate::forms::{ChangePasswordForm, ProfileForm};
use crate::routes;

/// Profile editing for the signed-in user, seeded from the cached user query.
#[component]
pub fn ProfileView() -> Element {
    let user = crate::session::use_current_user();

    let body = match &*user.read() {
        None => rsx! {
            p { class: "text-center text-neutral-500", "Loading..." }
        },
        Some(Ok(user)) => rsx! {
            ProfileForm { key: "{user.id}", user: user.clone() }
        },
        Some(Err(e)) => {
            let message = e.message();
            rsx! {
                div {
                    class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "{message} "
                    Link { to: routes::LOGIN, class: "font-bold", "Log in" }
                }
            }
        }
    };

    rsx! {
        div {
            class: "mx-auto max-w-3xl",
            h1 { class: "text-5xl font-black", "My profile" }
            p {
                class: "text-2xl font-light text-neutral-500 mt-5",
                "Update your information here"
            }
            {body}
        }
    }
}

#[component]
pub fn ChangePasswordView() -> Element {
    rsx! {
        div {
            class: "mx-auto max-w-3xl",
            h1 { class: "text-5xl font-black", "Change password" }
            p {
                class: "text-2xl font-light text-neutral-500 mt-5",
                "Use this form to change your password"
            }
            ChangePasswordForm {}
        }
    }
}
