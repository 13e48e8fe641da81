use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E6003.as_str(), "E6003");
}

#[test]
fn test_error_code_phase_prefix() {
    assert!(ErrorCode::E0001.as_str().starts_with("E0"));
    assert!(ErrorCode::E1005.as_str().starts_with("E1"));
    assert!(ErrorCode::E6010.as_str().starts_with("E6"));
}
