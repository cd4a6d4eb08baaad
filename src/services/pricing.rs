//! Currency conversion and shipping info

use crate::abstractions::{ExchangeRates, ShippingProvider};
use anyhow::Result;

/// Currency prices are quoted in unless configured otherwise
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

pub const SHIPPING_UNAVAILABLE: &str = "Shipping Unavailable";

/// Convert a price quoted in the default base currency into `currency`
pub fn get_price_in_currency(
    rates: &dyn ExchangeRates,
    price: f64,
    currency: &str,
) -> Result<f64> {
    convert_price(rates, price, DEFAULT_BASE_CURRENCY, currency)
}

/// Convert a price between two currencies using one rate lookup
pub fn convert_price(
    rates: &dyn ExchangeRates,
    price: f64,
    from: &str,
    to: &str,
) -> Result<f64> {
    let rate = rates.get_exchange_rate(from, to)?;
    Ok(price * rate)
}

/// Describe shipping to `destination`, or say that none is available
pub fn get_shipping_info(shipping: &dyn ShippingProvider, destination: &str) -> String {
    match shipping.get_shipping_quote(destination) {
        Some(quote) => format!(
            "Shipping Cost: ${} ({} days)",
            quote.cost, quote.estimated_days
        ),
        None => SHIPPING_UNAVAILABLE.to_string(),
    }
}
