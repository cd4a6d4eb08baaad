//! Core business logic module with pure functions
//!
//! This module contains the storefront rules without any I/O operations.
//! Following the "functional core, imperative shell" pattern, all functions here:
//! - Take inputs and return outputs
//! - Have no side effects
//! - Read wall-clock time only through an injected [`Clock`](crate::abstractions::Clock)
//! - Are easily testable without mocks

pub mod eligibility;
pub mod pricing;
pub mod schedule;
pub mod stack;
pub mod validation;

use thiserror::Error;

pub use eligibility::{can_drive, CountryCode};
pub use pricing::{apply_coupon, calculate_discount, get_coupons, Coupon};
pub use schedule::{get_discount, is_online, is_online_with, StoreHours};
pub use stack::Stack;
pub use validation::{
    is_price_in_range, is_valid_username, is_valid_username_str, validate_user_input,
    UserInputReport,
};

/// A business rule rejected its input.
///
/// The display text of every variant starts with "Invalid" so callers that
/// only look at the rendered message can keep matching on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Invalid price")]
    InvalidPrice,

    #[error("Invalid discount code")]
    InvalidDiscountCode,

    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),
}
