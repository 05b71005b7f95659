//! Small styled building blocks shared by the forms.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod field;
pub use field::{ErrorMessage, FormField, Label};
