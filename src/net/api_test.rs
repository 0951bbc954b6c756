use super::*;

// =============================================================
// Headers
// =============================================================

#[test]
fn request_headers_always_send_json() {
    let headers = request_headers(None);
    assert!(headers.contains(&("Content-Type", "application/json".to_owned())));
    assert!(headers.contains(&("Accept", "application/json".to_owned())));
    assert!(headers.iter().all(|(name, _)| *name != "Authorization"));
}

#[test]
fn request_headers_attach_bearer_token() {
    let headers = request_headers(Some("tok-123"));
    assert!(headers.contains(&("Authorization", "Bearer tok-123".to_owned())));
}

#[test]
fn request_headers_skip_empty_token() {
    let headers = request_headers(Some(""));
    assert!(headers.iter().all(|(name, _)| *name != "Authorization"));
}

// =============================================================
// Envelope decoding
// =============================================================

#[test]
fn decode_success_returns_data() {
    let body = r#"{"success":true,"data":{"id":1,"name":"Ravi","email":"r@x.io","role":"admin"}}"#;
    let user: Option<User> = decode_envelope(200, body).unwrap();
    assert_eq!(user.map(|u| u.name), Some("Ravi".to_owned()));
}

#[test]
fn decode_success_without_data_is_none() {
    let data: Option<User> = decode_envelope(200, r#"{"success":true,"message":"ok"}"#).unwrap();
    assert!(data.is_none());
    let data: Option<User> = decode_envelope(200, r#"{"success":true,"data":null}"#).unwrap();
    assert!(data.is_none());
}

#[test]
fn decode_failure_flag_is_rejected_even_with_data() {
    let body = r#"{"success":false,"data":{"id":1},"message":"Invalid credentials"}"#;
    let err = decode_envelope::<User>(200, body).unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected { status: 200, message: "Invalid credentials".to_owned() }
    );
}

#[test]
fn decode_error_status_uses_envelope_message() {
    let err = decode_envelope::<User>(401, r#"{"success":false,"message":"Token expired"}"#).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 401, message: "Token expired".to_owned() });
}

#[test]
fn decode_error_status_without_message_uses_default() {
    let err = decode_envelope::<User>(500, r#"{"success":false,"message":"  "}"#).unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected { status: 500, message: DEFAULT_FAILURE_MESSAGE.to_owned() }
    );
}

#[test]
fn decode_non_envelope_error_body_reports_status() {
    let err = decode_envelope::<User>(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502 });
}

#[test]
fn decode_non_envelope_ok_body_is_decode_error() {
    let err = decode_envelope::<User>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_wrong_data_shape_is_decode_error() {
    let err = decode_envelope::<Vec<Order>>(200, r#"{"success":true,"data":{"id":"x"}}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_order_list() {
    let body = r#"{"success":true,"data":[{"id":1,"order_number":"SO-1"},{"id":"2"}]}"#;
    let orders: Vec<Order> = require_data(decode_envelope(200, body).unwrap()).unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, "1");
    assert_eq!(orders[1].id, "2");
}

// =============================================================
// require_data
// =============================================================

#[test]
fn require_data_rejects_none() {
    assert_eq!(require_data::<User>(None).unwrap_err(), ApiError::MissingData);
    assert_eq!(require_data(Some(3)).unwrap(), 3);
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}
