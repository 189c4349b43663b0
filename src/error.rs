//! Shared error classification helpers
//!
//! Narrows arbitrary JSON-shaped error values to ones carrying a string
//! code, so callers can classify a failure (e.g. tell "file not found"
//! apart from other I/O errors) without probing fields on a value that
//! may not be an object.

use serde_json::Value;

/// Extract a string-typed `code` field from a JSON-shaped error value.
///
/// Returns `None` for non-objects, objects without a `code` field, and
/// objects whose `code` is not a string.
pub fn error_code(value: &Value) -> Option<&str> {
    value.as_object()?.get("code")?.as_str()
}

/// True iff `value` is an object carrying a string-typed `code`.
///
/// Total and side-effect free: every other input is `false`, never an
/// error.
pub fn is_error_with_code(value: &Value) -> bool {
    error_code(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_false_for_non_objects() {
        assert!(!is_error_with_code(&json!(null)));
        assert!(!is_error_with_code(&json!("string")));
        assert!(!is_error_with_code(&json!(123)));
        assert!(!is_error_with_code(&json!([1, 2, 3])));
    }

    #[test]
    fn test_false_for_objects_without_code() {
        assert!(!is_error_with_code(&json!({})));
        assert!(!is_error_with_code(&json!({"foo": "bar"})));
    }

    #[test]
    fn test_false_when_code_is_not_a_string() {
        assert!(!is_error_with_code(&json!({"code": null})));
        assert!(!is_error_with_code(&json!({"code": 123})));
        assert!(!is_error_with_code(&json!({"code": {}})));
    }

    #[test]
    fn test_true_for_string_code() {
        assert!(is_error_with_code(&json!({"code": "ENOENT"})));
        assert!(is_error_with_code(&json!({"code": "other-string"})));
    }

    #[test]
    fn test_code_extraction() {
        assert_eq!(error_code(&json!({"code": "ENOENT"})), Some("ENOENT"));
        assert_eq!(error_code(&json!({"code": 123})), None);
        assert_eq!(error_code(&json!("ENOENT")), None);
    }
}
