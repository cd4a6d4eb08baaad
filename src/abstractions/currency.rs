//! Exchange-rate lookup abstraction

use crate::config::CurrencySettings;
use crate::error::common;
use anyhow::Result;
use std::collections::HashMap;

/// Trait for currency conversion rates
pub trait ExchangeRates: Send + Sync {
    /// Rate to multiply an amount in `from` by to express it in `to`
    fn get_exchange_rate(&self, from: &str, to: &str) -> Result<f64>;
}

/// Rate table relative to a base currency, loaded from configuration
#[derive(Debug, Clone)]
pub struct RealExchangeRates {
    rates: HashMap<String, f64>,
}

impl RealExchangeRates {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    pub fn from_settings(settings: &CurrencySettings) -> Self {
        Self::new(settings.rates.clone())
    }

    fn rate_for(&self, currency: &str) -> Result<f64> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| common::exchange_rate_unavailable(currency).into())
    }
}

impl ExchangeRates for RealExchangeRates {
    fn get_exchange_rate(&self, from: &str, to: &str) -> Result<f64> {
        let from_rate = self.rate_for(from)?;
        let to_rate = self.rate_for(to)?;
        if from_rate <= 0.0 {
            return Err(common::exchange_rate_unavailable(from).into());
        }
        tracing::debug!(from, to, "Looked up exchange rate");
        Ok(to_rate / from_rate)
    }
}
