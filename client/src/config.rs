//! Remote API location and endpoint paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is an external service. Its base URL is baked in at compile
//! time from `WASTENEST_API_URL`; an unset value means same-origin requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const GET_USER_INFO_ROUTE: &str = "/api/auth/userinfo";
pub const LOGIN_ROUTE: &str = "/api/auth/login";
pub const LOGOUT_ROUTE: &str = "/api/auth/logout";
pub const MARK_NOTIFICATION_READ_ROUTE: &str = "/api/user/notification/read";
pub const MARK_ALL_NOTIFICATION_READ_ROUTE: &str = "/api/user/notification/read-all";
pub const IMPACT_DATA_ROUTE: &str = "/api/impact";

/// Where API requests are sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: &'static str,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/') }
    }

    /// Config for this build, read from `WASTENEST_API_URL` at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("WASTENEST_API_URL").unwrap_or_default())
    }

    /// Absolute (or same-origin) URL for an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
