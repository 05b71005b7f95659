use dioxus::prelude::*;

use crate::icons::{FaKey, FaRightFromBracket, FaUser};
use crate::routes;
use crate::feedback::use_feedback;
use crate::session::use_api;
use crate::submit;
use crate::Icon;

/// Centered column used by every screen under `/auth`.
#[component]
pub fn AuthFrame(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-neutral-800",
            div {
                class: "py-10 lg:py-20 mx-auto w-[450px] max-w-full px-4",
                p {
                    class: "text-center text-4xl font-black text-white",
                    "UpTask"
                }
                div {
                    class: "mt-10",
                    {children}
                }
            }
        }
    }
}

/// Header with account navigation around the signed-in screens.
#[component]
pub fn AppFrame(children: Element) -> Element {
    let api = use_api();
    let feedback = use_feedback();

    let handle_logout = move |_| {
        api.set_token(None);
        tracing::info!("Logged out");
        feedback.apply(submit::logout(), || {});
    };

    rsx! {
        header {
            class: "bg-neutral-800 py-5",
            div {
                class: "max-w-screen-2xl mx-auto flex items-center justify-between px-5",
                Link {
                    to: routes::HOME,
                    class: "text-3xl font-black text-white",
                    "UpTask"
                }
                nav {
                    class: "flex items-center gap-5 text-white text-sm",
                    Link {
                        to: routes::PROFILE,
                        class: "flex items-center gap-2 hover:text-fuchsia-400",
                        Icon { icon: FaUser, width: 14, height: 14 }
                        "Profile"
                    }
                    Link {
                        to: routes::CHANGE_PASSWORD,
                        class: "flex items-center gap-2 hover:text-fuchsia-400",
                        Icon { icon: FaKey, width: 14, height: 14 }
                        "Change password"
                    }
                    button {
                        class: "flex items-center gap-2 hover:text-fuchsia-400 cursor-pointer",
                        onclick: handle_logout,
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        "Log out"
                    }
                }
            }
        }
        main {
            class: "max-w-screen-2xl mx-auto mt-10 p-5",
            {children}
        }
    }
}

/// Links between the auth screens.
#[component]
pub(crate) fn AuthLinks(links: Vec<(&'static str, &'static str)>) -> Element {
    rsx! {
        nav {
            class: "mt-10 flex flex-col space-y-4",
            for (to, label) in links {
                Link {
                    to,
                    class: "text-center text-neutral-300 font-normal",
                    "{label}"
                }
            }
        }
    }
}
