//! Mock exchange-rate lookup

use crate::abstractions::ExchangeRates;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Builder for creating configured mock exchange rates
#[derive(Default)]
pub struct MockExchangeRatesBuilder {
    rates: HashMap<String, f64>,
    default_rate: Option<f64>,
}

impl MockExchangeRatesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rate returned when converting into `currency`
    pub fn with_rate(mut self, currency: &str, rate: f64) -> Self {
        self.rates.insert(currency.to_string(), rate);
        self
    }

    /// Rate returned for any currency without its own entry
    pub fn with_default_rate(mut self, rate: f64) -> Self {
        self.default_rate = Some(rate);
        self
    }

    pub fn build(self) -> MockExchangeRates {
        MockExchangeRates {
            rates: self.rates,
            default_rate: self.default_rate,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock implementation of ExchangeRates for testing
///
/// Lookups with no configured rate fail.
#[derive(Clone)]
pub struct MockExchangeRates {
    rates: HashMap<String, f64>,
    default_rate: Option<f64>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockExchangeRates {
    pub fn builder() -> MockExchangeRatesBuilder {
        MockExchangeRatesBuilder::new()
    }

    /// Always answer with `rate`
    pub fn returning(rate: f64) -> Self {
        Self::builder().with_default_rate(rate).build()
    }

    /// Every `(from, to)` pair looked up so far
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ExchangeRates for MockExchangeRates {
    fn get_exchange_rate(&self, from: &str, to: &str) -> Result<f64> {
        self.calls
            .lock()
            .unwrap()
            .push((from.to_string(), to.to_string()));

        self.rates
            .get(to)
            .copied()
            .or(self.default_rate)
            .ok_or_else(|| anyhow::anyhow!("No mock rate for {} -> {}", from, to))
    }
}
