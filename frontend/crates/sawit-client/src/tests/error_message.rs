use crate::REQUEST_FAILED;
use crate::client::client::error_message;

#[test]
fn test_error_field_is_used() {
    assert_eq!(error_message(br#"{"error":"bad request"}"#), "bad request");
}

#[test]
fn test_missing_error_field_falls_back() {
    assert_eq!(error_message(br#"{"detail":"x"}"#), REQUEST_FAILED);
}

#[test]
fn test_empty_error_string_falls_back() {
    assert_eq!(error_message(br#"{"error":""}"#), REQUEST_FAILED);
}

#[test]
fn test_non_string_error_falls_back() {
    assert_eq!(
        error_message(br#"{"error":{"code":"NOT_FOUND"}}"#),
        REQUEST_FAILED
    );
}

#[test]
fn test_non_json_body_falls_back() {
    assert_eq!(error_message(b"<html>502 Bad Gateway</html>"), REQUEST_FAILED);
    assert_eq!(error_message(b""), REQUEST_FAILED);
}

#[test]
fn test_json_array_body_falls_back() {
    assert_eq!(error_message(br#"["error"]"#), REQUEST_FAILED);
}
