//! This crate contains all shared UI for the workspace.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`submit`] | Validate-then-call flows, one per form, returning a [`Submission`] |
//! | [`effects`] | Toasts, invalidations, navigation and resets a submission asks for |
//! | [`forms`] | Profile, change-password and new-password forms |
//! | [`views`] | Page-level screens wrapped by the platform routers |
//! | [`pin_input`] | One-time code state and its six-box input |

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod effects;
pub use effects::{Effect, EffectSink, Toast, ToastLevel};

pub mod submit;
pub use submit::Submission;

pub mod routes;

mod session;
pub use session::{use_api, use_current_user, use_query_client, AppProvider, QueryClient};

mod toast;
pub use toast::{push_toast, use_toasts, ToastContainer, Toasts};

mod feedback;
pub use feedback::{use_feedback, Feedback};

pub mod pin_input;
pub use pin_input::{PinCode, PinInput};

pub mod forms;

pub mod views;

#[cfg(test)]
mod testing;
