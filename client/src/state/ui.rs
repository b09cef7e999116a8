//! Local UI chrome state (sidebar and notification dropdown).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session so layout
//! controls can change without touching server-derived data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Open/closed flags for layout chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub notifications_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }

    /// Collapse everything, e.g. after following a navigation link.
    pub fn close_all(&mut self) {
        self.sidebar_open = false;
        self.notifications_open = false;
    }
}
