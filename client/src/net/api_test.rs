use super::*;

#[test]
fn only_status_200_is_success() {
    assert_eq!(expect_ok_status(200), Ok(()));
    assert_eq!(expect_ok_status(201), Err(ApiError::Status(201)));
    assert_eq!(expect_ok_status(401), Err(ApiError::Status(401)));
    assert_eq!(expect_ok_status(500), Err(ApiError::Status(500)));
}

#[test]
fn status_accessor_only_reports_server_answers() {
    assert_eq!(ApiError::Status(500).status(), Some(500));
    assert_eq!(ApiError::Transport("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("eof".to_owned()).status(), None);
}

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(ApiError::Status(404).to_string(), "unexpected status: 404");
    assert_eq!(ApiError::Transport("dns".to_owned()).to_string(), "request failed: dns");
}

#[test]
fn http_api_outside_browser_reports_unavailable() {
    let api = HttpApi::new(ApiConfig::new("https://api.example.test"));
    let result = futures::executor::block_on(api.fetch_user_info());
    assert_eq!(result, Err(ApiError::Unavailable));
}
