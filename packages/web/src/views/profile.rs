use dioxus::prelude::*;
use ui::views::{ChangePasswordView, ProfileView};

#[component]
pub fn Profile() -> Element {
    rsx! { ProfileView {} }
}

#[component]
pub fn ChangePassword() -> Element {
    rsx! { ChangePasswordView {} }
}
