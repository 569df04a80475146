use super::*;

#[test]
fn describe_error_covers_each_family() {
    assert_eq!(describe_error(&ApiError::Network("x".to_owned())), "Could not reach the server.");
    assert_eq!(
        describe_error(&ApiError::Status { status: 401, body: String::new() }),
        "Please sign in to see this."
    );
    assert_eq!(describe_error(&ApiError::Status { status: 404, body: String::new() }), "Nothing here.");
    assert_eq!(describe_error(&ApiError::Status { status: 502, body: String::new() }), "Request failed (502).");
    assert_eq!(describe_error(&ApiError::Decode("eof".to_owned())), "Unexpected response from the server.");
}
