//! Unread-notification actions for the header dropdown.
//!
//! Both actions confirm with the server before touching local state: a failed
//! call returns the error and the caller keeps its current list.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::api::{ApiError, SessionApi};
use crate::net::types::Notification;

/// "Mark all as read" only appears once more than this many are unread.
pub const MARK_ALL_THRESHOLD: usize = 2;

pub const MARK_READ_FAILED_MESSAGE: &str = "Some Error Occured";
pub const ALL_MARKED_MESSAGE: &str = "All Notifications Marked as Read";

/// Copy of `current` without the notification `id`.
#[must_use]
pub fn without(current: &[Notification], id: &str) -> Vec<Notification> {
    current.iter().filter(|n| n.id != id).cloned().collect()
}

#[must_use]
pub fn shows_mark_all(count: usize) -> bool {
    count > MARK_ALL_THRESHOLD
}

/// Bell badge text, hidden when nothing is unread.
#[must_use]
pub fn badge_label(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

/// Mark one notification read and return the list with it removed.
///
/// # Errors
///
/// Returns the API error unchanged; nothing has been removed locally.
pub async fn mark_notification_read<A: SessionApi>(
    api: &A,
    current: &[Notification],
    id: &str,
) -> Result<Vec<Notification>, ApiError> {
    api.mark_notification_read(id)
        .await
        .inspect_err(|e| log::warn!("error marking notification {id} as read: {e}"))?;
    Ok(without(current, id))
}

/// Mark everything read and return the (empty) list.
///
/// # Errors
///
/// Returns the API error unchanged; the caller keeps its list.
pub async fn mark_all_notifications_read<A: SessionApi>(api: &A) -> Result<Vec<Notification>, ApiError> {
    api.mark_all_notifications_read()
        .await
        .inspect_err(|e| log::warn!("error marking all notifications as read: {e}"))?;
    Ok(Vec::new())
}
