/// Error code registry for Storefront
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Stack errors
/// - 3000-3999: Validation and business-rule errors
/// - 4000-4999: Collaborator (service) errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;
    pub const CONFIG_PATH_ERROR: u16 = 1004;

    // Stack errors (2000-2999)
    pub const STACK_EMPTY: u16 = 2001;

    // Validation errors (3000-3999)
    pub const VALIDATION_INVALID_PRICE: u16 = 3001;
    pub const VALIDATION_INVALID_DISCOUNT_CODE: u16 = 3002;
    pub const VALIDATION_INVALID_COUNTRY_CODE: u16 = 3003;
    pub const VALIDATION_INVALID_USER_INPUT: u16 = 3004;

    // Service errors (4000-4999)
    pub const SERVICE_EXCHANGE_RATE: u16 = 4001;
    pub const SERVICE_PAYMENT: u16 = 4003;
    pub const SERVICE_EMAIL: u16 = 4004;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "General configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_PARSE_ERROR => "Failed to parse configuration",
        ErrorCode::CONFIG_INVALID_VALUE => "Invalid configuration value",
        ErrorCode::CONFIG_PATH_ERROR => "Could not determine configuration path",

        ErrorCode::STACK_EMPTY => "Operation requires a non-empty stack",

        ErrorCode::VALIDATION_INVALID_PRICE => "Price is not a non-negative number",
        ErrorCode::VALIDATION_INVALID_DISCOUNT_CODE => "Discount code is not a string",
        ErrorCode::VALIDATION_INVALID_COUNTRY_CODE => "Country code is not supported",
        ErrorCode::VALIDATION_INVALID_USER_INPUT => "Username or age failed validation",

        ErrorCode::SERVICE_EXCHANGE_RATE => "Exchange rate lookup failed",
        ErrorCode::SERVICE_PAYMENT => "Payment charge failed",
        ErrorCode::SERVICE_EMAIL => "Email dispatch failed",

        _ => "Unrecognized error code",
    }
}
