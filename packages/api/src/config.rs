//! Backend location, read from the environment.

use serde::{Deserialize, Serialize};

/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "UPTASK_API_URL";

/// Used when [`API_URL_VAR`] is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every route is appended to, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Native builds read `.env` and the process environment; web builds use
    /// the value baked in at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let url = {
            dotenvy::dotenv().ok();
            std::env::var(API_URL_VAR).ok()
        };
        #[cfg(target_arch = "wasm32")]
        let url = option_env!("UPTASK_API_URL").map(str::to_string);

        url.filter(|u| !u.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Absolute URL for a route such as `/auth/profile`.
    pub fn url(&self, route: &str) -> String {
        format!("{}/{}", self.base_url, route.trim_start_matches('/'))
    }
}
