//! Mock payment gateway

use crate::abstractions::{ChargeResult, CreditCard, PaymentGateway, PaymentStatus};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Builder for creating configured mock payment gateways
#[derive(Default)]
pub struct MockPaymentGatewayBuilder {
    responses: VecDeque<Result<ChargeResult>>,
}

impl MockPaymentGatewayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a charge that reports `status`
    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.responses.push_back(Ok(ChargeResult { status }));
        self
    }

    /// Queue a charge where the gateway itself fails
    pub fn with_error(mut self, error: &str) -> Self {
        self.responses.push_back(Err(anyhow::anyhow!(error.to_string())));
        self
    }

    pub fn build(self) -> MockPaymentGateway {
        MockPaymentGateway {
            responses: Arc::new(Mutex::new(self.responses)),
            charges: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock implementation of PaymentGateway for testing
///
/// Queued responses are consumed in order and the last one repeats. With
/// nothing queued every charge succeeds.
#[derive(Clone)]
pub struct MockPaymentGateway {
    responses: Arc<Mutex<VecDeque<Result<ChargeResult>>>>,
    charges: Arc<Mutex<Vec<(CreditCard, f64)>>>,
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MockPaymentGateway {
    pub fn builder() -> MockPaymentGatewayBuilder {
        MockPaymentGatewayBuilder::new()
    }

    /// Every charge resolves with `status`
    pub fn resolving(status: PaymentStatus) -> Self {
        Self::builder().with_status(status).build()
    }

    /// Every `(card, amount)` pair charged so far
    pub fn charges(&self) -> Vec<(CreditCard, f64)> {
        self.charges.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(&self, card: &CreditCard, amount: f64) -> Result<ChargeResult> {
        self.charges.lock().unwrap().push((card.clone(), amount));

        let mut responses = self.responses.lock().unwrap();
        match responses.len() {
            0 => Ok(ChargeResult::success()),
            // the last queued response repeats
            1 => match responses.front() {
                Some(Ok(result)) => Ok(*result),
                Some(Err(e)) => Err(anyhow::anyhow!(e.to_string())),
                None => Ok(ChargeResult::success()),
            },
            _ => responses
                .pop_front()
                .unwrap_or_else(|| Ok(ChargeResult::success())),
        }
    }
}
