//! Email dispatch abstraction

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Trait for sending a plain-text message to one recipient
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, message: &str) -> Result<()>;
}

/// Sender that logs each message and keeps a count of dispatches
#[derive(Debug, Clone, Default)]
pub struct RealEmailSender {
    sent: Arc<Mutex<usize>>,
}

impl RealEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages sent through this instance and its clones
    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|count| *count).unwrap_or(0)
    }
}

#[async_trait]
impl EmailSender for RealEmailSender {
    async fn send_email(&self, to: &str, message: &str) -> Result<()> {
        tracing::info!(to, bytes = message.len(), "Sending email");
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| anyhow::anyhow!("Email outbox lock poisoned"))?;
        *sent += 1;
        Ok(())
    }
}
