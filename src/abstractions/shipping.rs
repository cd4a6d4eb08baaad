//! Shipping quote abstraction

use crate::config::ShippingSettings;
use serde::{Deserialize, Serialize};

/// Price and delivery estimate for a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub cost: f64,
    pub estimated_days: u32,
}

/// Trait for shipping quotes; `None` means the destination is not served
pub trait ShippingProvider: Send + Sync {
    fn get_shipping_quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Flat-rate shipping with a list of destinations that are not served
#[derive(Debug, Clone)]
pub struct RealShippingProvider {
    flat_cost: f64,
    estimated_days: u32,
    unavailable: Vec<String>,
}

impl RealShippingProvider {
    pub fn from_settings(settings: &ShippingSettings) -> Self {
        Self {
            flat_cost: settings.flat_cost,
            estimated_days: settings.estimated_days,
            unavailable: settings.unavailable.clone(),
        }
    }
}

impl ShippingProvider for RealShippingProvider {
    fn get_shipping_quote(&self, destination: &str) -> Option<ShippingQuote> {
        let destination = destination.trim();
        if destination.is_empty()
            || self
                .unavailable
                .iter()
                .any(|blocked| blocked.eq_ignore_ascii_case(destination))
        {
            tracing::debug!(destination, "No shipping to destination");
            return None;
        }

        Some(ShippingQuote {
            cost: self.flat_cost,
            estimated_days: self.estimated_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> RealShippingProvider {
        RealShippingProvider::from_settings(&ShippingSettings {
            flat_cost: 10.0,
            estimated_days: 2,
            unavailable: vec!["Antarctica".to_string()],
        })
    }

    #[test]
    fn test_flat_rate_quote() {
        assert_eq!(
            provider().get_shipping_quote("New York"),
            Some(ShippingQuote {
                cost: 10.0,
                estimated_days: 2
            })
        );
    }

    #[test]
    fn test_unserved_destinations() {
        assert_eq!(provider().get_shipping_quote("antarctica"), None);
        assert_eq!(provider().get_shipping_quote("   "), None);
    }
}
