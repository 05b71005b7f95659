use dioxus::prelude::*;
use ui::views::{AppFrame, AuthFrame};

use crate::Route;

#[component]
pub fn AuthLayout() -> Element {
    rsx! {
        AuthFrame {
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        AppFrame {
            Outlet::<Route> {}
        }
    }
}
