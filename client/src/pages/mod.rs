//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and delegates chrome and gating
//! to `components`.

pub mod auth;
pub mod home;
pub mod sections;
