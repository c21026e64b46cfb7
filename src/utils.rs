//! Helpers for the optional fields used throughout the data types.
//!
//! Every field of a representation is optional. The `*_p` constructors
//! wrap a value for assignment, the `p_*` readers unwrap it with the
//! type's zero value as fallback.

/// Wraps a string.
pub fn string_p(value: impl Into<String>) -> Option<String> {
    Some(value.into())
}

/// Wraps a bool.
pub fn bool_p(value: bool) -> Option<bool> {
    Some(value)
}

/// Wraps an integer.
pub fn int_p(value: i64) -> Option<i64> {
    Some(value)
}

/// Wraps a 32-bit integer.
pub fn int32_p(value: i32) -> Option<i32> {
    Some(value)
}

/// Wraps a 64-bit integer.
pub fn int64_p(value: i64) -> Option<i64> {
    Some(value)
}

/// Wraps a 32-bit float.
pub fn float32_p(value: f32) -> Option<f32> {
    Some(value)
}

/// Wraps a 64-bit float.
pub fn float64_p(value: f64) -> Option<f64> {
    Some(value)
}

/// Reads a string, empty when absent.
pub fn p_string(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Reads a bool, false when absent.
pub fn p_bool(value: &Option<bool>) -> bool {
    value.unwrap_or_default()
}

/// Reads an integer, zero when absent.
pub fn p_int(value: &Option<i64>) -> i64 {
    value.unwrap_or_default()
}

/// Reads a 32-bit integer, zero when absent.
pub fn p_int32(value: &Option<i32>) -> i32 {
    value.unwrap_or_default()
}

/// Reads a 64-bit integer, zero when absent.
pub fn p_int64(value: &Option<i64>) -> i64 {
    value.unwrap_or_default()
}

/// Reads a 32-bit float, zero when absent.
pub fn p_float32(value: &Option<f32>) -> f32 {
    value.unwrap_or_default()
}

/// Reads a 64-bit float, zero when absent.
pub fn p_float64(value: &Option<f64>) -> f64 {
    value.unwrap_or_default()
}

/// Returns true when the list is absent, empty, or starts with an empty string.
pub fn nil_or_empty_array(value: &Option<Vec<String>>) -> bool {
    match value {
        None => true,
        Some(items) => items.first().map_or(true, |first| first.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_p() {
        assert_eq!(string_p("test value").as_deref(), Some("test value"));
    }

    #[test]
    fn test_p_string() {
        assert_eq!(p_string(&Some("test value".to_string())), "test value");
        assert_eq!(p_string(&None), "");
    }

    #[test]
    fn test_bool_p() {
        assert_eq!(bool_p(false), Some(false));
        assert_eq!(bool_p(true), Some(true));
    }

    #[test]
    fn test_p_bool() {
        assert!(p_bool(&Some(true)));
        assert!(!p_bool(&Some(false)));
        assert!(!p_bool(&None));
    }

    #[test]
    fn test_int_helpers() {
        assert_eq!(int_p(42), Some(42));
        assert_eq!(int32_p(42), Some(42i32));
        assert_eq!(int64_p(42), Some(42i64));

        assert_eq!(p_int(&Some(42)), 42);
        assert_eq!(p_int(&None), 0);
        assert_eq!(p_int32(&Some(42)), 42i32);
        assert_eq!(p_int32(&None), 0i32);
        assert_eq!(p_int64(&Some(42)), 42i64);
        assert_eq!(p_int64(&None), 0i64);
    }

    #[test]
    fn test_float_helpers() {
        assert_eq!(float32_p(42.42), Some(42.42f32));
        assert_eq!(float64_p(42.42), Some(42.42f64));

        assert_eq!(p_float32(&Some(42.42)), 42.42f32);
        assert_eq!(p_float32(&None), 0.0f32);
        assert_eq!(p_float64(&Some(42.42)), 42.42f64);
        assert_eq!(p_float64(&None), 0.0f64);
    }

    #[test]
    fn test_nil_or_empty_array() {
        assert!(!nil_or_empty_array(&Some(vec!["c".into(), "d".into()])));
        assert!(nil_or_empty_array(&Some(vec!["".into(), "b".into()])));
        assert!(nil_or_empty_array(&Some(vec![])));
        assert!(nil_or_empty_array(&None));
    }
}
