//! Mock shipping provider

use crate::abstractions::{ShippingProvider, ShippingQuote};
use std::sync::{Arc, Mutex};

/// Mock implementation of ShippingProvider for testing
#[derive(Clone, Default)]
pub struct MockShippingProvider {
    quote: Option<ShippingQuote>,
    destinations: Arc<Mutex<Vec<String>>>,
}

impl MockShippingProvider {
    /// Quote the same cost and delivery time for every destination
    pub fn with_quote(cost: f64, estimated_days: u32) -> Self {
        Self {
            quote: Some(ShippingQuote {
                cost,
                estimated_days,
            }),
            ..Self::default()
        }
    }

    /// Never quote
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn destinations(&self) -> Vec<String> {
        self.destinations.lock().unwrap().clone()
    }
}

impl ShippingProvider for MockShippingProvider {
    fn get_shipping_quote(&self, destination: &str) -> Option<ShippingQuote> {
        self.destinations
            .lock()
            .unwrap()
            .push(destination.to_string());
        self.quote.clone()
    }
}
