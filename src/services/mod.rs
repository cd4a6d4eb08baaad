//! Operations that depend on external collaborators
//!
//! Each free function takes the collaborators it needs as trait objects.
//! [`Storefront`] bundles one instance of every collaborator for callers that
//! want a single handle, such as the CLI.

pub mod accounts;
pub mod orders;
pub mod pages;
pub mod pricing;

pub use accounts::{is_valid_email, login, sign_up, WELCOME_MESSAGE};
pub use orders::{submit_order, Order, OrderOutcome, PAYMENT_ERROR};
pub use pages::{render_page, HOME_PATH};
pub use pricing::{
    convert_price, get_price_in_currency, get_shipping_info, DEFAULT_BASE_CURRENCY,
    SHIPPING_UNAVAILABLE,
};

use crate::abstractions::{
    Analytics, Clock, CreditCard, EmailSender, ExchangeRates, PaymentGateway, RealAnalytics,
    RealEmailSender, RealExchangeRates, RealPaymentGateway, RealSecurityCodes,
    RealShippingProvider, SecurityCodes, ShippingProvider, SystemClock,
};
use crate::config::StorefrontConfig;
use crate::core::{get_discount, is_online_with, StoreHours};
use anyhow::Result;
use std::sync::Arc;

/// Every collaborator the storefront talks to, plus the settings they share
#[derive(Clone)]
pub struct Storefront {
    pub clock: Arc<dyn Clock>,
    pub rates: Arc<dyn ExchangeRates>,
    pub shipping: Arc<dyn ShippingProvider>,
    pub payment: Arc<dyn PaymentGateway>,
    pub email: Arc<dyn EmailSender>,
    pub analytics: Arc<dyn Analytics>,
    pub security: Arc<dyn SecurityCodes>,
    pub base_currency: String,
    pub store_hours: StoreHours,
}

impl Storefront {
    /// Wire the default collaborators from configuration
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            rates: Arc::new(RealExchangeRates::from_settings(&config.currency)),
            shipping: Arc::new(RealShippingProvider::from_settings(&config.shipping)),
            payment: Arc::new(RealPaymentGateway),
            email: Arc::new(RealEmailSender::new()),
            analytics: Arc::new(RealAnalytics),
            security: Arc::new(RealSecurityCodes),
            base_currency: config.currency.base.clone(),
            store_hours: config.store_hours,
        }
    }

    pub fn price_in_currency(&self, price: f64, currency: &str) -> Result<f64> {
        convert_price(self.rates.as_ref(), price, &self.base_currency, currency)
    }

    pub fn shipping_info(&self, destination: &str) -> String {
        get_shipping_info(self.shipping.as_ref(), destination)
    }

    pub async fn submit_order(&self, order: &Order, card: &CreditCard) -> Result<OrderOutcome> {
        submit_order(self.payment.as_ref(), order, card).await
    }

    pub async fn sign_up(&self, email: &str) -> Result<bool> {
        sign_up(self.email.as_ref(), email).await
    }

    pub async fn login(&self, email: &str) -> Result<()> {
        login(self.security.as_ref(), self.email.as_ref(), email).await
    }

    pub async fn render_page(&self) -> String {
        render_page(self.analytics.as_ref()).await
    }

    /// Whether the store is open under the configured hours
    pub fn is_online(&self) -> bool {
        is_online_with(self.clock.as_ref(), &self.store_hours)
    }

    pub fn holiday_discount(&self) -> f64 {
        get_discount(self.clock.as_ref())
    }
}
