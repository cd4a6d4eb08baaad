//! Mock implementations for testing
//!
//! One double per collaborator trait. Each records how it was called and can
//! be cloned so a test keeps a handle while the code under test owns another.

pub mod analytics;
pub mod clock;
pub mod currency;
pub mod email;
pub mod payment;
pub mod security;
pub mod shipping;

pub use analytics::MockAnalytics;
pub use clock::MockClock;
pub use currency::{MockExchangeRates, MockExchangeRatesBuilder};
pub use email::{MockEmailSender, SentEmail};
pub use payment::{MockPaymentGateway, MockPaymentGatewayBuilder};
pub use security::SpySecurityCodes;
pub use shipping::MockShippingProvider;
