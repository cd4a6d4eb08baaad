use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

use crate::core::RuleViolation;

/// The unified error type for the storefront library
#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Stack {
        code: u16,
        message: String,
        operation: &'static str,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {service} service error: {message}")]
    Service {
        code: u16,
        message: String,
        service: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StorefrontError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Error raised by `pop`/`peek` on an empty stack
    pub fn empty_stack(operation: &'static str) -> Self {
        Self::Stack {
            code: ErrorCode::STACK_EMPTY,
            message: format!("Stack is empty: cannot {}", operation),
            operation,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Create a service error with specific code
    pub fn service_with_code(
        code: u16,
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Service {
            code,
            message: message.into(),
            service: service.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    ///
    /// Stack errors never carry a source and are returned unchanged.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Validation { source: src, .. }
            | Self::Service { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::Stack { .. } => {}
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Stack { .. } => 3,
            Self::Validation { .. } => 4,
            Self::Service { .. } => 5,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Stack { code, .. }
            | Self::Validation { code, .. }
            | Self::Service { code, .. } => *code,
        }
    }
}

impl From<RuleViolation> for StorefrontError {
    fn from(violation: RuleViolation) -> Self {
        let (code, field) = match &violation {
            RuleViolation::InvalidPrice => (ErrorCode::VALIDATION_INVALID_PRICE, "price"),
            RuleViolation::InvalidDiscountCode => {
                (ErrorCode::VALIDATION_INVALID_DISCOUNT_CODE, "discount_code")
            }
            RuleViolation::InvalidCountryCode(_) => {
                (ErrorCode::VALIDATION_INVALID_COUNTRY_CODE, "country_code")
            }
        };
        Self::validation_with_code(code, violation.to_string(), Some(field.to_string()))
    }
}

/// Type alias for Results using StorefrontError
pub type Result<T> = std::result::Result<T, StorefrontError>;
