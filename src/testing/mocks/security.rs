//! Spy over a security code generator

use crate::abstractions::{RealSecurityCodes, SecurityCodes};
use std::sync::{Arc, Mutex};

/// Delegates to a real generator and remembers every code it handed out
#[derive(Clone)]
pub struct SpySecurityCodes {
    inner: Arc<dyn SecurityCodes>,
    results: Arc<Mutex<Vec<u32>>>,
}

impl Default for SpySecurityCodes {
    fn default() -> Self {
        Self::wrapping(Arc::new(RealSecurityCodes))
    }
}

impl SpySecurityCodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrapping(inner: Arc<dyn SecurityCodes>) -> Self {
        Self {
            inner,
            results: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Codes returned so far, oldest first
    pub fn results(&self) -> Vec<u32> {
        self.results.lock().unwrap().clone()
    }
}

impl SecurityCodes for SpySecurityCodes {
    fn generate_code(&self) -> u32 {
        let code = self.inner.generate_code();
        self.results.lock().unwrap().push(code);
        code
    }
}
