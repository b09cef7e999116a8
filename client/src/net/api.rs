//! REST client for the remote WasteNest API.
//!
//! Client-side (hydrate): real credentialed HTTP calls via `gloo-net`.
//! Server-side (SSR) and native test builds: every call fails with
//! `ApiError::Unavailable`, since the cookie session only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Only HTTP 200 counts as success. Transport failures, other statuses, and
//! undecodable bodies all come back as `ApiError` so callers can fall back to
//! an anonymous session or a toast instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{ImpactStats, LoginRequest, UserInfo};
use crate::config::ApiConfig;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Calls this layer makes against the backend.
///
/// `HttpApi` is the browser implementation; tests substitute in-memory fakes.
pub trait SessionApi {
    /// `GET` get-current-user. `{}` decodes to a payload without a user.
    fn fetch_user_info(&self) -> impl Future<Output = Result<UserInfo, ApiError>>;

    /// `POST` login with email + password; the session cookie is set by the server.
    fn login(&self, request: &LoginRequest) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET` logout.
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `PATCH` mark-notification-read with `{ "notificationId": id }`.
    fn mark_notification_read(&self, notification_id: &str) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET` mark-all-notifications-read.
    fn mark_all_notifications_read(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET` get-impact-statistics.
    fn fetch_impact_stats(&self) -> impl Future<Output = Result<ImpactStats, ApiError>>;
}

#[cfg(any(test, feature = "hydrate"))]
fn expect_ok_status(status: u16) -> Result<(), ApiError> {
    if status == 200 { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Browser HTTP client. Every request carries cookies (`credentials: include`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use super::{ApiError, expect_ok_status};

    pub(super) fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(RequestCredentials::Include)
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = with_credentials(builder)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        expect_ok_status(resp.status())?;
        Ok(resp)
    }

    pub(super) async fn send_json<B: serde::Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let req = with_credentials(builder)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        expect_ok_status(resp.status())?;
        Ok(resp)
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl SessionApi for HttpApi {
    async fn fetch_user_info(&self) -> Result<UserInfo, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::config::GET_USER_INFO_ROUTE;
            let url = self.config.url(GET_USER_INFO_ROUTE);
            let resp = browser::send(gloo_net::http::Request::get(&url)).await?;
            browser::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::config::LOGIN_ROUTE;
            let url = self.config.url(LOGIN_ROUTE);
            browser::send_json(gloo_net::http::Request::post(&url), request).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::config::LOGOUT_ROUTE;
            let url = self.config.url(LOGOUT_ROUTE);
            browser::send(gloo_net::http::Request::get(&url)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn mark_notification_read(&self, notification_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::config::MARK_NOTIFICATION_READ_ROUTE;
            use crate::net::types::MarkNotificationRead;
            let url = self.config.url(MARK_NOTIFICATION_READ_ROUTE);
            let body = MarkNotificationRead { notification_id: notification_id.to_owned() };
            browser::send_json(gloo_net::http::Request::patch(&url), &body).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notification_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::config::MARK_ALL_NOTIFICATION_READ_ROUTE;
            let url = self.config.url(MARK_ALL_NOTIFICATION_READ_ROUTE);
            browser::send(gloo_net::http::Request::get(&url)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_impact_stats(&self) -> Result<ImpactStats, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::config::IMPACT_DATA_ROUTE;
            let url = self.config.url(IMPACT_DATA_ROUTE);
            let resp = browser::send(gloo_net::http::Request::get(&url)).await?;
            browser::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
