//! Coupon catalog and discount calculation

use super::RuleViolation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A discount code and the fraction it takes off, always in (0, 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub discount: f64,
}

impl Coupon {
    fn new(code: &str, discount: f64) -> Self {
        Self {
            code: code.to_string(),
            discount,
        }
    }
}

const CATALOG: &[(&str, f64)] = &[("SAVE20", 0.2), ("SAVE10", 0.1)];

/// The fixed coupon catalog
pub fn get_coupons() -> Vec<Coupon> {
    CATALOG
        .iter()
        .map(|(code, discount)| Coupon::new(code, *discount))
        .collect()
}

fn discount_rate(code: &str) -> Option<f64> {
    CATALOG
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, rate)| *rate)
}

/// Apply a discount code to a price
///
/// Unknown codes leave the price unchanged. Negative or NaN prices are rejected.
pub fn apply_coupon(price: f64, discount_code: &str) -> Result<f64, RuleViolation> {
    if price.is_nan() || price < 0.0 {
        return Err(RuleViolation::InvalidPrice);
    }

    let rate = discount_rate(discount_code).unwrap_or(0.0);
    Ok(price * (1.0 - rate))
}

/// Loosely typed form of [`apply_coupon`]
///
/// The price must be a JSON number and the code a JSON string; anything else
/// is reported as an invalid price or an invalid discount code, price first.
pub fn calculate_discount(price: &Value, discount_code: &Value) -> Result<f64, RuleViolation> {
    let price = price.as_f64().ok_or(RuleViolation::InvalidPrice)?;
    if price < 0.0 {
        return Err(RuleViolation::InvalidPrice);
    }
    let code = discount_code
        .as_str()
        .ok_or(RuleViolation::InvalidDiscountCode)?;

    apply_coupon(price, code)
}
