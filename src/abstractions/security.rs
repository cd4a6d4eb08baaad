//! One-time security code abstraction

use rand::Rng;

pub const CODE_MIN: u32 = 100_000;
pub const CODE_MAX: u32 = 999_999;

/// Trait for generating one-time login codes
pub trait SecurityCodes: Send + Sync {
    fn generate_code(&self) -> u32;
}

/// Random six-digit codes from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RealSecurityCodes;

impl SecurityCodes for RealSecurityCodes {
    fn generate_code(&self) -> u32 {
        rand::rng().random_range(CODE_MIN..=CODE_MAX)
    }
}
