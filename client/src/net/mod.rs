//! Networking modules for the remote WasteNest API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues credentialed HTTP calls and `types` defines the JSON payloads
//! the backend returns.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_api;
