//! Abstraction layers for external collaborators
//!
//! Every service the storefront talks to (clock, currency rates, shipping,
//! payment, email, analytics, security codes) sits behind a narrow trait so
//! callers can pass a test double instead of the default implementation.

pub mod analytics;
pub mod clock;
pub mod currency;
pub mod email;
pub mod payment;
pub mod security;
pub mod shipping;

pub use analytics::{Analytics, RealAnalytics};
pub use clock::{Clock, SystemClock};
pub use currency::{ExchangeRates, RealExchangeRates};
pub use email::{EmailSender, RealEmailSender};
pub use payment::{ChargeResult, CreditCard, PaymentGateway, PaymentStatus, RealPaymentGateway};
pub use security::{RealSecurityCodes, SecurityCodes};
pub use shipping::{RealShippingProvider, ShippingProvider, ShippingQuote};
