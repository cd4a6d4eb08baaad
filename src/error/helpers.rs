use super::{ErrorCode, StorefrontError};

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to a configuration error, keeping the original as source
    fn to_config_error(self, message: impl Into<String>) -> Result<T, StorefrontError>;

    /// Convert a collaborator failure to a service error with `code`
    fn to_service_error(
        self,
        code: u16,
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<T, StorefrontError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, message: impl Into<String>) -> Result<T, StorefrontError> {
        self.map_err(|e| StorefrontError::config(message).with_source(e))
    }

    fn to_service_error(
        self,
        code: u16,
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<T, StorefrontError> {
        self.map_err(|e| StorefrontError::service_with_code(code, service, message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> StorefrontError {
        StorefrontError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
    }

    /// Create an invalid configuration value error
    pub fn invalid_config_value(key: &str, reason: impl std::fmt::Display) -> StorefrontError {
        StorefrontError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("Invalid value for '{}': {}", key, reason),
        )
    }

    /// Create an exchange rate failure for a currency
    pub fn exchange_rate_unavailable(currency: &str) -> StorefrontError {
        StorefrontError::service_with_code(
            ErrorCode::SERVICE_EXCHANGE_RATE,
            "currency",
            format!("No exchange rate for '{}'", currency),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::common::*;
    use super::*;

    #[test]
    fn test_to_config_error_wraps_source() {
        let parsed: Result<u8, std::num::ParseIntError> = "abc".parse::<u8>();
        let err = parsed.to_config_error("bad opening hour").unwrap_err();

        assert_eq!(err.code(), ErrorCode::CONFIG_GENERIC);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_to_service_error() {
        let failed: Result<(), std::io::Error> = Err(std::io::Error::other("timeout"));
        let err = failed
            .to_service_error(ErrorCode::SERVICE_EMAIL, "email", "dispatch failed")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "[E4004] email service error: dispatch failed"
        );
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_common_helpers() {
        assert_eq!(
            exchange_rate_unavailable("XYZ").code(),
            ErrorCode::SERVICE_EXCHANGE_RATE
        );
        assert_eq!(
            config_not_found("/tmp/none.toml").code(),
            ErrorCode::CONFIG_NOT_FOUND
        );
        assert!(invalid_config_value("log_level", "loud")
            .to_string()
            .contains("log_level"));
    }
}
