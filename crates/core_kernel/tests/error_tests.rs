//! Tests for the port error type

use core_kernel::PortError;

#[test]
fn test_not_found_message() {
    let error = PortError::not_found("Loan", "LOAN-123");
    assert_eq!(error.to_string(), "Not found: Loan with id LOAN-123");
    assert!(error.is_not_found());
    assert!(!error.is_transient());
}

#[test]
fn test_connection_is_transient() {
    let error = PortError::connection("store unreachable");
    assert!(error.is_transient());
    assert!(!error.is_not_found());
}

#[test]
fn test_conflict_message() {
    let error = PortError::conflict("loan already stored");
    assert!(error.to_string().contains("loan already stored"));
}

#[test]
fn test_internal_is_not_transient() {
    let error = PortError::internal("lock poisoned");
    assert!(!error.is_transient());
}
