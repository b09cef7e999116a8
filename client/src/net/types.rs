//! JSON payloads consumed from the remote API.
//!
//! DESIGN
//! ======
//! The backend is a JavaScript service, so numeric fields arrive as JSON
//! numbers that may be integral or fractional, and occasionally as `null` or
//! numeric strings. Numbers are decoded leniently into `f64` so one odd field
//! does not turn a whole response into a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity fields of the signed-in user. Every field is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserIdentity {
    /// Backend user identifier (Mongo-style `_id`).
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

/// A single unread notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Opaque identifier used by the mark-read endpoint.
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-readable notification text.
    #[serde(default)]
    pub message: String,
}

/// Response of the get-current-user endpoint.
///
/// `{}` means no authenticated session; a populated `user` means signed in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub user: Option<UserIdentity>,
    #[serde(default, rename = "totalBalance", deserialize_with = "deserialize_f64_lenient")]
    pub total_balance: f64,
    #[serde(default, deserialize_with = "deserialize_notifications")]
    pub notification: Vec<Notification>,
}

/// Aggregate community impact figures shown on the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactStats {
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub waste_collected: f64,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub reports_submitted: f64,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub tokens_earned: f64,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub co2_offset: f64,
}

/// Credentials posted by the auth form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of the mark-one-read request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkNotificationRead {
    #[serde(rename = "notificationId")]
    pub notification_id: String,
}

fn deserialize_notifications<'de, D>(deserializer: D) -> Result<Vec<Notification>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Notification>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
