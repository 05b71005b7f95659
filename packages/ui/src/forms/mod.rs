//! Form components.
//!
//! Each form keeps one signal per field, validates and submits through a flow
//! in [`crate::submit`], and hands the outcome to [`crate::feedback::Feedback`].
//! While a request is outstanding the submit button is disabled and further
//! submits are ignored.

use api::FieldErrors;
use dioxus::prelude::*;

mod profile;
pub use profile::ProfileForm;

mod change_password;
pub use change_password::ChangePasswordForm;

mod new_password;
pub use new_password::NewPasswordForm;

pub(crate) fn field_error(errors: Signal<FieldErrors>, field: &str) -> Option<String> {
    errors.read().get(field).map(String::from)
}
