//! Screens under `/auth`.

use dioxus::prelude::*;
use ui::views::{
    ConfirmAccountView, ForgotPasswordView, LoginView, NewPasswordView, RegisterView,
    RequestCodeView,
};

#[component]
pub fn Login() -> Element {
    rsx! { LoginView {} }
}

#[component]
pub fn Register() -> Element {
    rsx! { RegisterView {} }
}

#[component]
pub fn ConfirmAccount() -> Element {
    rsx! { ConfirmAccountView {} }
}

#[component]
pub fn RequestCode() -> Element {
    rsx! { RequestCodeView {} }
}

#[component]
pub fn ForgotPassword() -> Element {
    rsx! { ForgotPasswordView {} }
}

#[component]
pub fn NewPassword() -> Element {
    rsx! { NewPasswordView {} }
}
