//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::temporal::TemporalError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("port must not be zero");

    match error {
        CoreError::Configuration(msg) => assert!(msg.contains("port")),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_core_error_from_temporal_error() {
    let temporal_error = TemporalError::InvalidMonth("2024-13".to_string());
    let core_error: CoreError = temporal_error.into();

    assert!(matches!(core_error, CoreError::Temporal(_)));
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}

#[test]
fn test_temporal_error_display_names_input() {
    let error = TemporalError::InvalidDate("not-a-date".to_string());

    assert_eq!(error.to_string(), "Invalid date 'not-a-date': expected YYYY-MM-DD");
}
