//! # API crate: schemas and REST client for the UpTask backend
//!
//! Everything the UI needs to talk to the backend lives here, independent of
//! any rendering framework.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Users, auth payloads, and the read-only task/project/note/team projections |
//! | [`validation`] | [`Validate`] trait, [`FieldErrors`], and the shared field rules |
//! | [`client`] | [`AuthApi`] trait and its HTTP implementation [`ApiClient`] |
//! | [`error`] | [`ApiError`], the single failure type of every call |
//! | [`config`] | [`ApiConfig`], the backend base URL |

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use client::{ApiClient, AuthApi};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::*;
pub use validation::{FieldError, FieldErrors, Validate};
