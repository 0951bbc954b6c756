use super::*;

#[test]
fn rejected_user_message_is_server_message() {
    let err = ApiError::Rejected { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn status_user_message_includes_code() {
    assert_eq!(ApiError::Status { status: 502 }.user_message(), "Request failed (502).");
}

#[test]
fn network_user_message_hides_details() {
    let err = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.user_message(), "Unable to reach the server.");
    assert!(err.to_string().contains("Failed to fetch"));
}
