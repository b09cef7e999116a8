use futures::executor::block_on;
use leptos::reactive::owner::Owner;

use super::*;
use crate::net::fake_api::FakeApi;
use crate::net::types::UserIdentity;

// =============================================================
// Helpers
// =============================================================

fn signed_in(balance: f64, notifications: &[&str]) -> UserInfo {
    UserInfo {
        user: Some(UserIdentity { id: "u-1".to_owned(), name: "Asha".to_owned(), email: "asha@example.com".to_owned() }),
        total_balance: balance,
        notification: notifications
            .iter()
            .map(|id| Notification { id: (*id).to_owned(), message: format!("msg {id}") })
            .collect(),
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_unresolved() {
    assert_eq!(SessionState::default(), SessionState::Unresolved);
    assert!(!SessionState::default().is_resolved());
}

#[test]
fn empty_payload_classifies_as_anonymous() {
    assert_eq!(SessionState::from_user_info(UserInfo::default()), SessionState::Anonymous);
}

#[test]
fn payload_with_user_classifies_as_authenticated() {
    let state = SessionState::from_user_info(signed_in(12.0, &["n-1"]));
    assert!(state.is_authenticated());
    assert_eq!(state.balance(), 12.0);
    assert_eq!(state.notifications().len(), 1);
}

#[test]
fn anonymous_and_unresolved_expose_no_balance_or_notifications() {
    for state in [SessionState::Unresolved, SessionState::Anonymous] {
        assert_eq!(state.balance(), 0.0);
        assert!(state.notifications().is_empty());
        assert!(state.user_info().is_none());
    }
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_starts_unresolved_and_replace_swaps_whole_value() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        assert_eq!(store.get_untracked(), SessionState::Unresolved);

        store.replace(SessionState::from_user_info(signed_in(5.0, &["n-1", "n-2"])));
        assert_eq!(store.get_untracked().notifications().len(), 2);

        store.replace(SessionState::Anonymous);
        assert_eq!(store.get_untracked(), SessionState::Anonymous);
    });
}

// =============================================================
// Boot guard
// =============================================================

#[test]
fn boot_fetch_starts_only_when_unresolved_and_idle() {
    assert!(needs_boot_fetch(&SessionState::Unresolved, false));
    assert!(!needs_boot_fetch(&SessionState::Unresolved, true));
    assert!(!needs_boot_fetch(&SessionState::Anonymous, false));
    assert!(!needs_boot_fetch(&SessionState::Anonymous, true));
    let authed = SessionState::from_user_info(signed_in(1.0, &[]));
    assert!(!needs_boot_fetch(&authed, false));
    assert!(!needs_boot_fetch(&authed, true));
}

#[test]
fn boot_store_write_does_not_trigger_a_second_fetch() {
    let owner = Owner::new();
    owner.with(|| {
        let api = FakeApi { user_info: Err(ApiError::Status(500)), ..FakeApi::default() };
        let store = SessionStore::new();
        let mut in_flight = false;

        // Each pass stands in for one run of the app's boot effect; the
        // passes after the first follow the fetch's own store write.
        for _ in 0..3 {
            if store.with(|state| needs_boot_fetch(state, in_flight)) {
                in_flight = true;
                store.replace(block_on(load_session(&api)));
                in_flight = false;
            }
        }

        assert_eq!(api.count("fetch_user_info"), 1);
        assert_eq!(store.get_untracked(), SessionState::Anonymous);
    });
}

// =============================================================
// Boot load
// =============================================================

#[test]
fn load_session_resolves_to_anonymous_on_transport_failure() {
    let api = FakeApi { user_info: Err(ApiError::Transport("offline".to_owned())), ..FakeApi::default() };
    let state = block_on(load_session(&api));
    assert_eq!(state, SessionState::Anonymous);
    assert_eq!(api.count("fetch_user_info"), 1);
}

#[test]
fn load_session_never_stays_unresolved() {
    let outcomes = [
        Ok(UserInfo::default()),
        Ok(signed_in(1.0, &[])),
        Err(ApiError::Status(500)),
        Err(ApiError::Decode("eof".to_owned())),
        Err(ApiError::Transport("reset".to_owned())),
    ];
    for outcome in outcomes {
        let api = FakeApi { user_info: outcome, ..FakeApi::default() };
        assert!(block_on(load_session(&api)).is_resolved());
    }
}

#[test]
fn load_session_authenticates_when_user_present() {
    let api = FakeApi { user_info: Ok(signed_in(3.0, &[])), ..FakeApi::default() };
    assert!(block_on(load_session(&api)).is_authenticated());
}

// =============================================================
// Refresh
// =============================================================

#[test]
fn refresh_failure_keeps_current_state() {
    let api = FakeApi { user_info: Err(ApiError::Status(502)), ..FakeApi::default() };
    assert_eq!(block_on(refresh_session(&api)), None);
}

#[test]
fn refresh_can_demote_to_anonymous_on_expiry() {
    let api = FakeApi::default();
    assert_eq!(block_on(refresh_session(&api)), Some(SessionState::Anonymous));
}

#[test]
fn refresh_updates_authenticated_payload() {
    let api = FakeApi { user_info: Ok(signed_in(99.0, &["n-7"])), ..FakeApi::default() };
    let next = block_on(refresh_session(&api)).unwrap();
    assert_eq!(next.balance(), 99.0);
    assert_eq!(next.notifications()[0].id, "n-7");
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_rereads_session_after_success() {
    let api = FakeApi { user_info: Ok(signed_in(0.0, &[])), ..FakeApi::default() };
    let request = LoginRequest { email: "asha@example.com".to_owned(), password: "pw".to_owned() };
    let state = block_on(login(&api, &request)).unwrap();
    assert!(state.is_authenticated());
    assert_eq!(api.calls(), vec!["login:asha@example.com".to_owned(), "fetch_user_info".to_owned()]);
}

#[test]
fn login_failure_skips_session_fetch() {
    let api = FakeApi { login: Err(ApiError::Status(401)), ..FakeApi::default() };
    let request = LoginRequest { email: "x@y.z".to_owned(), password: "bad".to_owned() };
    assert_eq!(block_on(login(&api, &request)), Err(ApiError::Status(401)));
    assert_eq!(api.count("fetch_user_info"), 0);
}

#[test]
fn logout_success_forces_anonymous() {
    let api = FakeApi::default();
    assert_eq!(block_on(logout(&api)), Ok(SessionState::Anonymous));
}

#[test]
fn logout_failure_is_reported_to_caller() {
    let api = FakeApi { logout: Err(ApiError::Status(500)), ..FakeApi::default() };
    assert_eq!(block_on(logout(&api)), Err(ApiError::Status(500)));
}

#[test]
fn logout_failure_messages_distinguish_server_errors() {
    assert_eq!(logout_failure_message(&ApiError::Status(500)), "Internal Server Error");
    assert_eq!(logout_failure_message(&ApiError::Status(403)), "Error Logging Out");
    assert_eq!(logout_failure_message(&ApiError::Transport("offline".to_owned())), "Error Logging Out");
}
