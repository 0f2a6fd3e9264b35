use oxfordface::Error;
use std::io;

#[test]
fn test_error_display() {
    // Test display implementation for each hand-built error variant
    let errors = [
        (
            Error::InvalidConfig("missing api key".to_string()),
            "Invalid configuration: missing api key",
        ),
        (
            Error::InvalidRequest("missing parameter".to_string()),
            "Invalid request: missing parameter",
        ),
        (
            Error::InvalidData("malformed json".to_string()),
            "Invalid data format: malformed json",
        ),
        (
            Error::Service {
                status: 404,
                code: Some("FaceListNotFound".to_string()),
                message: "Face list is not found.".to_string(),
            },
            "Service error (HTTP 404): Face list is not found.",
        ),
    ];

    for (error, expected_message) in errors {
        assert_eq!(error.to_string(), expected_message);
    }
}

#[test]
fn test_error_from_io_error() {
    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error: Error = io_error.into();

    match error {
        Error::IOError(_) => {} // Success
        _ => panic!("Expected IOError variant"),
    }
}

#[test]
fn test_error_from_json_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let error: Error = json_error.into();

    match error {
        Error::JsonError(_) => {} // Success
        _ => panic!("Expected JsonError variant"),
    }
}

#[test]
fn test_service_error_status() {
    let error = Error::Service {
        status: 429,
        code: Some("RateLimitExceeded".to_string()),
        message: "Rate limit is exceeded.".to_string(),
    };

    assert_eq!(error.status(), Some(429));
}

#[test]
fn test_non_service_errors_have_no_status() {
    assert_eq!(Error::InvalidConfig("x".to_string()).status(), None);
    assert_eq!(Error::InvalidRequest("x".to_string()).status(), None);
    assert_eq!(Error::InvalidData("x".to_string()).status(), None);
}

#[test]
fn test_result_type() {
    // Test the Result type alias
    fn returns_result_success() -> oxfordface::Result<String> {
        Ok("success".to_string())
    }

    fn returns_result_error() -> oxfordface::Result<String> {
        Err(Error::InvalidConfig("test error".to_string()))
    }

    let success = returns_result_success();
    assert!(success.is_ok());
    assert_eq!(success.unwrap(), "success");

    let error = returns_result_error();
    assert!(error.is_err());
    match error.unwrap_err() {
        Error::InvalidConfig(msg) => assert_eq!(msg, "test error"),
        _ => panic!("Wrong error type"),
    }
}
