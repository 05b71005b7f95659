use dioxus::prelude::*;

use views::{
    AppLayout, AuthLayout, ChangePassword, ConfirmAccount, ForgotPassword, Login, NewPassword,
    Profile, Register, RequestCode,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AuthLayout)]
        #[route("/auth/login")]
        Login {},
        #[route("/auth/register")]
        Register {},
        #[route("/auth/confirm-account")]
        ConfirmAccount {},
        #[route("/auth/request-code")]
        RequestCode {},
        #[route("/auth/forgot-password")]
        ForgotPassword {},
        #[route("/auth/new-password")]
        NewPassword {},
    #[end_layout]
    #[layout(AppLayout)]
        #[route("/")]
        Root {},
        #[route("/profile")]
        Profile {},
        #[route("/profile/password")]
        ChangePassword {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }

        ui::AppProvider {
            config: api::ApiConfig::from_env(),
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/profile`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Profile {});
    rsx! {}
}
