//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and route gating while reading/writing
//! shared state from Leptos context providers.

pub mod footer;
pub mod gate;
pub mod header;
pub mod layout;
pub mod loading;
pub mod sidebar;
pub mod toast_stack;
