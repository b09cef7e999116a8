//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notifications`, `impact`, `toast`,
//! `ui`) so components depend on small focused models. Shared values are
//! injected through Leptos context rather than global singletons.

pub mod impact;
pub mod notifications;
pub mod session;
pub mod toast;
pub mod ui;
