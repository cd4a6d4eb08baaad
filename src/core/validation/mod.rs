//! Pure validation functions
//!
//! These functions validate user-supplied values without performing any I/O.
//! Inputs that may arrive with the wrong type (decoded form or JSON payloads)
//! are taken as [`serde_json::Value`] so that every shape has a defined answer.

use crate::error::{ErrorCode, Result, StorefrontError};
use serde::Serialize;
use serde_json::Value;

pub const USERNAME_MIN_LENGTH: usize = 5;
pub const USERNAME_MAX_LENGTH: usize = 15;

/// Bounds used by [`validate_user_input`]. The lower username bound differs
/// from [`USERNAME_MIN_LENGTH`] and is kept that way.
pub const INPUT_USERNAME_MIN_LENGTH: usize = 3;
pub const INPUT_USERNAME_MAX_LENGTH: usize = 15;
pub const INPUT_MIN_AGE: f64 = 18.0;
pub const INPUT_MAX_AGE: f64 = 100.0;

pub const INVALID_USERNAME: &str = "Invalid username";
pub const INVALID_AGE: &str = "Invalid age";
pub const VALIDATION_SUCCESSFUL: &str = "Validation successful";

/// Check that a username is a string of 5 to 15 characters
///
/// `None`, `null` and non-string values are rejected.
pub fn is_valid_username(username: Option<&Value>) -> bool {
    username
        .and_then(Value::as_str)
        .is_some_and(is_valid_username_str)
}

/// Typed variant of [`is_valid_username`]
pub fn is_valid_username_str(username: &str) -> bool {
    let length = username.chars().count();
    (USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length)
}

/// Inclusive range check on both ends
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    price >= min && price <= max
}

/// Outcome of [`validate_user_input`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UserInputReport {
    pub errors: Vec<String>,
}

impl UserInputReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn add_error(&mut self, error: &str) {
        self.errors.push(error.to_string());
    }

    /// Human-readable summary: the success text, or every error joined by ", "
    pub fn message(&self) -> String {
        if self.is_valid() {
            VALIDATION_SUCCESSFUL.to_string()
        } else {
            self.errors.join(", ")
        }
    }

    /// Turn a failed report into a validation error
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        Err(StorefrontError::validation_with_code(
            ErrorCode::VALIDATION_INVALID_USER_INPUT,
            self.message(),
            None,
        ))
    }
}

impl std::fmt::Display for UserInputReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Validate a username/age pair from a sign-up form
///
/// The username must be a string of 3 to 15 characters. The age must be a
/// number between 18 and 100 inclusive. Both checks always run so the report
/// names every failing field.
pub fn validate_user_input(username: &Value, age: &Value) -> UserInputReport {
    let mut report = UserInputReport::default();

    let username_ok = username.as_str().is_some_and(|name| {
        let length = name.chars().count();
        (INPUT_USERNAME_MIN_LENGTH..=INPUT_USERNAME_MAX_LENGTH).contains(&length)
    });
    if !username_ok {
        report.add_error(INVALID_USERNAME);
    }

    let age_ok = age
        .as_f64()
        .is_some_and(|age| (INPUT_MIN_AGE..=INPUT_MAX_AGE).contains(&age));
    if !age_ok {
        report.add_error(INVALID_AGE);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_username_length_boundaries() {
        let at_min = json!("A".repeat(USERNAME_MIN_LENGTH));
        let at_max = json!("A".repeat(USERNAME_MAX_LENGTH));
        let too_short = json!("A".repeat(USERNAME_MIN_LENGTH - 1));
        let too_long = json!("A".repeat(USERNAME_MAX_LENGTH + 1));

        assert!(is_valid_username(Some(&at_min)));
        assert!(is_valid_username(Some(&at_max)));
        assert!(!is_valid_username(Some(&too_short)));
        assert!(!is_valid_username(Some(&too_long)));
    }

    #[test]
    fn test_username_within_range() {
        assert!(is_valid_username_str(&"A".repeat(USERNAME_MIN_LENGTH + 1)));
        assert!(is_valid_username_str(&"A".repeat(USERNAME_MAX_LENGTH - 1)));
    }

    #[test]
    fn test_username_missing_or_wrong_type() {
        assert!(!is_valid_username(None));
        assert!(!is_valid_username(Some(&Value::Null)));
        assert!(!is_valid_username(Some(&json!(""))));
        assert!(!is_valid_username(Some(&json!(123456))));
    }

    #[test]
    fn test_username_counts_characters_not_bytes() {
        // five characters, ten bytes
        assert!(is_valid_username_str("ééééé"));
    }

    #[test]
    fn test_price_in_range_cases() {
        let cases = [
            ("price < min", -10.0, false),
            ("price > max", 40.0, false),
            ("price = min", 0.0, true),
            ("price = max", 20.0, true),
            ("price between min and max", 10.0, true),
        ];

        for (scenario, price, expected) in cases {
            assert_eq!(
                is_price_in_range(price, 0.0, 20.0),
                expected,
                "scenario: {scenario}"
            );
        }
    }

    #[test]
    fn test_valid_user_input() {
        let report = validate_user_input(&json!("John"), &json!(25));
        assert!(report.is_valid());
        assert_eq!(report.message(), "Validation successful");
    }

    #[test]
    fn test_invalid_username_shapes() {
        for username in [json!(25), json!("J"), json!("A".repeat(16)), json!("")] {
            let report = validate_user_input(&username, &json!(25));
            assert_eq!(report.message(), "Invalid username", "username: {username}");
        }
    }

    #[test]
    fn test_invalid_age_shapes() {
        for age in [json!("25"), json!(17), json!(101), json!(0), Value::Null] {
            let report = validate_user_input(&json!("John"), &age);
            assert_eq!(report.message(), "Invalid age", "age: {age}");
        }
    }

    #[test]
    fn test_age_boundaries_are_inclusive() {
        assert!(validate_user_input(&json!("John"), &json!(18)).is_valid());
        assert!(validate_user_input(&json!("John"), &json!(100)).is_valid());
    }

    #[test]
    fn test_both_invalid_names_both() {
        let report = validate_user_input(&json!(""), &json!(0));
        assert_eq!(report.message(), "Invalid username, Invalid age");
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_three_character_username_passes_here_but_not_is_valid_username() {
        assert!(validate_user_input(&json!("Ann"), &json!(30)).is_valid());
        assert!(!is_valid_username_str("Ann"));
    }

    #[test]
    fn test_into_result() {
        assert!(validate_user_input(&json!("John"), &json!(25))
            .into_result()
            .is_ok());

        let err = validate_user_input(&json!("J"), &json!(25))
            .into_result()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_INVALID_USER_INPUT);
        assert!(err.to_string().contains("Invalid username"));
    }
}
