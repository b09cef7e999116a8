//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing decisions, timers, and formatting free of
//! Leptos view code so they can be unit-tested without a browser.

pub mod format;
pub mod refresher;
pub mod route_gate;
