//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route gates, the header, and the landing page all read the session from a
//! `SessionStore` provided via context. Writers (boot load, periodic refresh,
//! login, logout) always replace the whole value through `SessionStore::replace`.
//!
//! ERROR HANDLING
//! ==============
//! A failed boot fetch resolves to `Anonymous` so gates never hang on the
//! loading spinner. A failed refresh leaves the current state untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{ApiError, SessionApi};
use crate::net::types::{LoginRequest, Notification, UserInfo};

/// Whether we know who the user is yet, and who they are.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// No fetch has completed yet.
    #[default]
    Unresolved,
    /// A fetch completed without an authenticated user (or failed).
    Anonymous,
    /// A fetch completed with a user payload.
    Authenticated(UserInfo),
}

impl SessionState {
    /// Classify a get-current-user payload by the presence of `user`.
    #[must_use]
    pub fn from_user_info(info: UserInfo) -> Self {
        if info.user.is_some() { Self::Authenticated(info) } else { Self::Anonymous }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn user_info(&self) -> Option<&UserInfo> {
        match self {
            Self::Authenticated(info) => Some(info),
            _ => None,
        }
    }

    /// Token balance, or zero when nobody is signed in.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.user_info().map_or(0.0, |info| info.total_balance)
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        self.user_info().map(|info| info.notification.as_slice()).unwrap_or_default()
    }

    /// Short tag for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Anonymous => "anonymous",
            Self::Authenticated(_) => "authenticated",
        }
    }
}

/// Context handle over the single process-wide `SessionState`.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::Unresolved) }
    }

    /// Tracked borrow, for readers that only need a field.
    pub fn with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.state.with(f)
    }

    #[must_use]
    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// The only writer. Replaces the whole value.
    pub fn replace(&self, next: SessionState) {
        log::debug!("session -> {}", next.label());
        self.state.set(next);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the app should start the boot fetch: only while the store is
/// unresolved and no fetch is already in flight. The fetch's own store write
/// re-runs the caller's effect, and this keeps it from starting a second one.
#[must_use]
pub fn needs_boot_fetch(state: &SessionState, in_flight: bool) -> bool {
    !in_flight && !state.is_resolved()
}

/// Boot fetch. Never returns `Unresolved`: every failure becomes `Anonymous`.
pub async fn load_session<A: SessionApi>(api: &A) -> SessionState {
    match api.fetch_user_info().await {
        Ok(info) => SessionState::from_user_info(info),
        Err(e) => {
            log::warn!("user info fetch failed, treating session as anonymous: {e}");
            SessionState::Anonymous
        }
    }
}

/// Periodic re-fetch. `None` means keep whatever the store already holds.
pub async fn refresh_session<A: SessionApi>(api: &A) -> Option<SessionState> {
    match api.fetch_user_info().await {
        Ok(info) => Some(SessionState::from_user_info(info)),
        Err(e) => {
            log::warn!("error fetching user info: {e}");
            None
        }
    }
}

/// Sign in, then re-read the session the server just established.
///
/// # Errors
///
/// Returns the login call's error; the session is not re-read in that case.
pub async fn login<A: SessionApi>(api: &A, request: &LoginRequest) -> Result<SessionState, ApiError> {
    api.login(request).await?;
    Ok(load_session(api).await)
}

/// Sign out. On success the caller writes the returned `Anonymous` state.
///
/// # Errors
///
/// Returns the logout call's error; the caller leaves the session unchanged.
pub async fn logout<A: SessionApi>(api: &A) -> Result<SessionState, ApiError> {
    api.logout().await.inspect_err(|e| log::warn!("logout failed: {e}"))?;
    Ok(SessionState::Anonymous)
}

pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logged Out Successfully";

/// Toast text for a failed logout.
#[must_use]
pub fn logout_failure_message(err: &ApiError) -> &'static str {
    if err.status() == Some(500) { "Internal Server Error" } else { "Error Logging Out" }
}
