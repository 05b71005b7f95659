mod layout;
pub use layout::{AppLayout, AuthLayout};

mod auth;
pub use auth::{ConfirmAccount, ForgotPassword, Login, NewPassword, Register, RequestCode};

mod profile;
pub use profile::{ChangePassword, Profile};
