//! Order submission

use crate::abstractions::{CreditCard, PaymentGateway, PaymentStatus};
use crate::error::{ErrorCode, ErrorExt};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const PAYMENT_ERROR: &str = "payment_error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub total_amount: f64,
}

impl Order {
    pub const fn new(total_amount: f64) -> Self {
        Self { total_amount }
    }
}

/// Result of submitting an order
///
/// Serialises as `{"success":true}` or `{"success":false,"error":"payment_error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn payment_error() -> Self {
        Self {
            success: false,
            error: Some(PAYMENT_ERROR.to_string()),
        }
    }
}

/// Charge the order total to the card
///
/// A declined charge becomes a `payment_error` outcome. Gateway failures are
/// returned as a payment service error with the gateway's error as source.
pub async fn submit_order(
    payment: &dyn PaymentGateway,
    order: &Order,
    credit_card: &CreditCard,
) -> Result<OrderOutcome> {
    let result = payment
        .charge(credit_card, order.total_amount)
        .await
        .to_service_error(ErrorCode::SERVICE_PAYMENT, "payment", "Charge failed")?;

    match result.status {
        PaymentStatus::Success => {
            info!(amount = order.total_amount, "Order submitted");
            Ok(OrderOutcome::succeeded())
        }
        PaymentStatus::Failed => {
            warn!(amount = order.total_amount, "Payment declined");
            Ok(OrderOutcome::payment_error())
        }
    }
}
