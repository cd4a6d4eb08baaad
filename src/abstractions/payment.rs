//! Payment gateway abstraction

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub credit_card_number: String,
}

impl CreditCard {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            credit_card_number: number.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
}

/// What the gateway reported for a charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    pub status: PaymentStatus,
}

impl ChargeResult {
    pub const fn success() -> Self {
        Self {
            status: PaymentStatus::Success,
        }
    }

    pub const fn failed() -> Self {
        Self {
            status: PaymentStatus::Failed,
        }
    }
}

/// Trait for charging a card
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` to `card`. A declined charge is `Ok` with a failed
    /// status; `Err` is reserved for the gateway itself failing.
    async fn charge(&self, card: &CreditCard, amount: f64) -> Result<ChargeResult>;
}

/// Offline gateway that approves cards passing the Luhn checksum
#[derive(Debug, Clone, Copy, Default)]
pub struct RealPaymentGateway;

fn passes_luhn(number: &str) -> bool {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| match (i % 2 == 1, d * 2) {
            (true, doubled) if doubled > 9 => doubled - 9,
            (true, doubled) => doubled,
            (false, _) => d,
        })
        .sum();
    sum % 10 == 0
}

#[async_trait]
impl PaymentGateway for RealPaymentGateway {
    async fn charge(&self, card: &CreditCard, amount: f64) -> Result<ChargeResult> {
        if !amount.is_finite() || amount < 0.0 {
            anyhow::bail!("Refusing to charge amount {}", amount);
        }

        let result = if passes_luhn(&card.credit_card_number) {
            ChargeResult::success()
        } else {
            ChargeResult::failed()
        };
        tracing::info!(amount, status = ?result.status, "Charged card");
        Ok(result)
    }
}
