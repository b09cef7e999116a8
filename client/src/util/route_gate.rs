//! Route table and session-based access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PrivateRoute`/`AuthRoute` components and the router fallback each render
//! one of these gates, so every page applies identical gating.
//!
//! Unknown paths always redirect to the auth entry, even for signed-in users.
//! There is no 404 page.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use crate::state::session::SessionState;

pub const AUTH_ENTRY: &str = "/auth";
pub const HOME_ENTRY: &str = "/";

/// What a gated route should render for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Session not resolved yet; show a spinner and wait for the next write.
    Loading,
    /// Render the wrapped content.
    Render,
    /// Navigate elsewhere.
    Redirect(&'static str),
}

/// Gate for signed-in-only pages.
#[must_use]
pub fn private_gate(state: &SessionState) -> GateOutcome {
    match state {
        SessionState::Unresolved => GateOutcome::Loading,
        SessionState::Anonymous => GateOutcome::Redirect(AUTH_ENTRY),
        SessionState::Authenticated(_) => GateOutcome::Render,
    }
}

/// Gate for the sign-in page: signed-in users are sent home.
#[must_use]
pub fn auth_gate(state: &SessionState) -> GateOutcome {
    match state {
        SessionState::Unresolved => GateOutcome::Loading,
        SessionState::Anonymous => GateOutcome::Render,
        SessionState::Authenticated(_) => GateOutcome::Redirect(HOME_ENTRY),
    }
}

/// Gate for paths outside the route table: always the auth entry, whatever
/// the session holds.
#[must_use]
pub fn fallback_gate(_state: &SessionState) -> GateOutcome {
    GateOutcome::Redirect(AUTH_ENTRY)
}

/// Every routed page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Report,
    Collect,
    Rewards,
    LeaderBoard,
    Settings,
    Auth,
}

impl AppRoute {
    pub const ALL: [Self; 7] =
        [Self::Home, Self::Report, Self::Collect, Self::Rewards, Self::LeaderBoard, Self::Settings, Self::Auth];

    /// Sidebar entries in display order.
    pub const NAV: [Self; 6] = [Self::Home, Self::Report, Self::Collect, Self::Rewards, Self::LeaderBoard, Self::Settings];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Report => "/report",
            Self::Collect => "/collect",
            Self::Rewards => "/rewards",
            Self::LeaderBoard => "/leaderboard",
            Self::Settings => "/settings",
            Self::Auth => AUTH_ENTRY,
        }
    }

    /// Path without the leading slash, as used by router segments.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Report => "Report Waste",
            Self::Collect => "Collect Waste",
            Self::Rewards => "Rewards",
            Self::LeaderBoard => "Leaderboard",
            Self::Settings => "Settings",
            Self::Auth => "Sign In",
        }
    }

    /// Match a location pathname, ignoring a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}
