//! Testing utilities and fixtures
//!
//! This module provides test doubles for every collaborator and a
//! [`TestContext`] that wires them into a [`Storefront`].

pub mod mocks;

use crate::core::StoreHours;
use crate::services::{Storefront, DEFAULT_BASE_CURRENCY};
use mocks::{
    MockAnalytics, MockClock, MockEmailSender, MockExchangeRates, MockPaymentGateway,
    MockShippingProvider, SpySecurityCodes,
};
use std::sync::Arc;

/// Test context containing one handle to each mock
///
/// The storefront built by [`TestContext::storefront`] shares state with these
/// handles, so assertions can inspect calls made through it.
#[derive(Clone)]
pub struct TestContext {
    pub clock: MockClock,
    pub rates: MockExchangeRates,
    pub shipping: MockShippingProvider,
    pub payment: MockPaymentGateway,
    pub email: MockEmailSender,
    pub analytics: MockAnalytics,
    pub security: SpySecurityCodes,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a context with permissive defaults: clock at 2024-01-01 12:00,
    /// rate 1.0, a $10 / 2 day quote, and approving payments
    pub fn new() -> Self {
        Self {
            clock: MockClock::at("2024-01-01 12:00"),
            rates: MockExchangeRates::returning(1.0),
            shipping: MockShippingProvider::with_quote(10.0, 2),
            payment: MockPaymentGateway::default(),
            email: MockEmailSender::new(),
            analytics: MockAnalytics::new(),
            security: SpySecurityCodes::new(),
        }
    }

    pub fn with_rates(mut self, rates: MockExchangeRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn with_shipping(mut self, shipping: MockShippingProvider) -> Self {
        self.shipping = shipping;
        self
    }

    pub fn with_payment(mut self, payment: MockPaymentGateway) -> Self {
        self.payment = payment;
        self
    }

    pub fn with_email(mut self, email: MockEmailSender) -> Self {
        self.email = email;
        self
    }

    /// Storefront backed by this context's mocks and the default store hours
    pub fn storefront(&self) -> Storefront {
        Storefront {
            clock: Arc::new(self.clock.clone()),
            rates: Arc::new(self.rates.clone()),
            shipping: Arc::new(self.shipping.clone()),
            payment: Arc::new(self.payment.clone()),
            email: Arc::new(self.email.clone()),
            analytics: Arc::new(self.analytics.clone()),
            security: Arc::new(self.security.clone()),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            store_hours: StoreHours::default(),
        }
    }
}
