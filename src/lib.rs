//! # Storefront
//!
//! Business rules, input validation and thin service wrappers for a small shop,
//! written so every piece can be tested without real infrastructure.
//!
//! ## Modules
//!
//! - `abstractions` - Trait-based abstractions for collaborators (clock, currency,
//!   shipping, payment, email, analytics, security codes)
//! - `config` - Layered TOML and environment configuration
//! - `core` - Pure rules: the `Stack` type, validators, discounts, driving age, store hours
//! - `error` - Unified error type with numeric codes
//! - `services` - Operations that call collaborators (orders, sign-up, login, pages)
//! - `testing` - Mock collaborators and a ready-wired test context
pub mod abstractions;
pub mod config;
pub mod core;
pub mod error;
pub mod services;

pub mod testing;


pub use error::{Result, StorefrontError};
