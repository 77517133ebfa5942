//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::time::Duration;

use serde::Deserialize;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

/// Request body for the SET operation (POST /cache/set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `ttl`: Lifetime in seconds, must be positive
///
/// All three fields are required. A negative or fractional `ttl` fails
/// deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// TTL in seconds
    pub ttl: u64,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.value.is_empty() {
            return Some("Value cannot be empty".to_string());
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        if self.ttl == 0 {
            return Some("TTL must be a positive number of seconds".to_string());
        }
        None
    }

    /// TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(key: &str, value: &str, ttl: u64) -> SetRequest {
        SetRequest {
            key: key.to_string(),
            value: value.to_string(),
            ttl,
        }
    }

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "test", "value": "hello", "ttl": 60}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, "hello");
        assert_eq!(req.ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_set_request_missing_ttl() {
        let json = r#"{"key": "test", "value": "hello"}"#;
        assert!(serde_json::from_str::<SetRequest>(json).is_err());
    }

    #[test]
    fn test_set_request_negative_ttl() {
        let json = r#"{"key": "test", "value": "hello", "ttl": -5}"#;
        assert!(serde_json::from_str::<SetRequest>(json).is_err());
    }

    #[test]
    fn test_validate_empty_key() {
        assert!(request("", "test", 60).validate().is_some());
    }

    #[test]
    fn test_validate_empty_value() {
        assert!(request("key", "", 60).validate().is_some());
    }

    #[test]
    fn test_validate_zero_ttl() {
        assert!(request("key", "value", 0).validate().is_some());
    }

    #[test]
    fn test_validate_key_too_long() {
        let long_key = "x".repeat(MAX_KEY_LENGTH + 1);
        assert!(request(&long_key, "value", 60).validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(request("valid_key", "test", 60).validate().is_none());
    }
}
