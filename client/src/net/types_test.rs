use super::*;

// =============================================================
// UserInfo
// =============================================================

#[test]
fn empty_object_decodes_to_anonymous_payload() {
    let info: UserInfo = serde_json::from_str("{}").unwrap();
    assert!(info.user.is_none());
    assert_eq!(info.total_balance, 0.0);
    assert!(info.notification.is_empty());
}

#[test]
fn populated_payload_decodes_user_balance_and_notifications() {
    let info: UserInfo = serde_json::from_value(serde_json::json!({
        "user": { "_id": "u-1", "name": "Asha", "email": "asha@example.com" },
        "totalBalance": 42.5,
        "notification": [
            { "_id": "n-1", "message": "Report verified" },
            { "_id": "n-2", "message": "Reward credited" }
        ]
    }))
    .unwrap();

    let user = info.user.unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.name, "Asha");
    assert_eq!(info.total_balance, 42.5);
    assert_eq!(info.notification.len(), 2);
    assert_eq!(info.notification[1].message, "Reward credited");
}

#[test]
fn null_user_and_null_notifications_are_tolerated() {
    let info: UserInfo = serde_json::from_value(serde_json::json!({
        "user": null,
        "totalBalance": null,
        "notification": null
    }))
    .unwrap();
    assert!(info.user.is_none());
    assert_eq!(info.total_balance, 0.0);
    assert!(info.notification.is_empty());
}

#[test]
fn user_with_missing_identity_fields_still_decodes() {
    let info: UserInfo = serde_json::from_value(serde_json::json!({ "user": {} })).unwrap();
    assert_eq!(info.user, Some(UserIdentity::default()));
}

#[test]
fn balance_accepts_numeric_string() {
    let info: UserInfo = serde_json::from_value(serde_json::json!({ "totalBalance": " 17 " })).unwrap();
    assert_eq!(info.total_balance, 17.0);
}

#[test]
fn balance_rejects_non_numeric_values() {
    let err = serde_json::from_value::<UserInfo>(serde_json::json!({ "totalBalance": [1] }));
    assert!(err.is_err());
}

// =============================================================
// ImpactStats
// =============================================================

#[test]
fn impact_stats_decode_camel_case_fields() {
    let stats: ImpactStats = serde_json::from_value(serde_json::json!({
        "wasteCollected": 1250.5,
        "reportsSubmitted": 87,
        "tokensEarned": 4300,
        "co2Offset": 310.2
    }))
    .unwrap();
    assert_eq!(
        stats,
        ImpactStats { waste_collected: 1250.5, reports_submitted: 87.0, tokens_earned: 4300.0, co2_offset: 310.2 }
    );
}

#[test]
fn impact_stats_missing_fields_default_to_zero() {
    let stats: ImpactStats = serde_json::from_value(serde_json::json!({ "tokensEarned": 5 })).unwrap();
    assert_eq!(stats.waste_collected, 0.0);
    assert_eq!(stats.tokens_earned, 5.0);
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn mark_read_body_uses_camel_case_key() {
    let body = MarkNotificationRead { notification_id: "n-9".to_owned() };
    assert_eq!(serde_json::to_value(body).unwrap(), serde_json::json!({ "notificationId": "n-9" }));
}

#[test]
fn login_request_serializes_email_and_password() {
    let body = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw" })
    );
}
