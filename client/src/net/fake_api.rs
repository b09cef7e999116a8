//! Scripted in-memory `SessionApi` used by unit tests.

use std::cell::RefCell;

use super::api::{ApiError, SessionApi};
use super::types::{ImpactStats, LoginRequest, UserInfo};

pub(crate) struct FakeApi {
    pub user_info: Result<UserInfo, ApiError>,
    pub login: Result<(), ApiError>,
    pub logout: Result<(), ApiError>,
    pub mark_read: Result<(), ApiError>,
    pub mark_all: Result<(), ApiError>,
    pub impact: Result<ImpactStats, ApiError>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            user_info: Ok(UserInfo::default()),
            login: Ok(()),
            logout: Ok(()),
            mark_read: Ok(()),
            mark_all: Ok(()),
            impact: Ok(ImpactStats::default()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == name).count()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl SessionApi for FakeApi {
    async fn fetch_user_info(&self) -> Result<UserInfo, ApiError> {
        self.record("fetch_user_info");
        self.user_info.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        self.record(format!("login:{}", request.email));
        self.login.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        self.logout.clone()
    }

    async fn mark_notification_read(&self, notification_id: &str) -> Result<(), ApiError> {
        self.record(format!("mark_read:{notification_id}"));
        self.mark_read.clone()
    }

    async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.record("mark_all");
        self.mark_all.clone()
    }

    async fn fetch_impact_stats(&self) -> Result<ImpactStats, ApiError> {
        self.record("fetch_impact_stats");
        self.impact.clone()
    }
}
