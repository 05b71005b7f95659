//! Paths of the screens the flows navigate between.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const CONFIRM_ACCOUNT: &str = "/auth/confirm-account";
pub const REQUEST_CODE: &str = "/auth/request-code";
pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
pub const NEW_PASSWORD: &str = "/auth/new-password";
pub const PROFILE: &str = "/profile";
pub const CHANGE_PASSWORD: &str = "/profile/password";
