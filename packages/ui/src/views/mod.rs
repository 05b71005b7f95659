//! Page-level views. Platform crates wrap these in their routes.

mod frame;
pub use frame::{AppFrame, AuthFrame};

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod confirm_account;
pub use confirm_account::ConfirmAccountView;

mod request_code;
pub use request_code::RequestCodeView;

mod forgot_password;
pub use forgot_password::ForgotPasswordView;

mod new_password;
pub use new_password::NewPasswordView;

mod profile;
pub use profile::{ChangePasswordView, ProfileView};
