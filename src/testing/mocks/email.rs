//! Mock email sender

use crate::abstractions::EmailSender;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// A message handed to the mock sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub message: String,
}

/// Mock implementation of EmailSender that records every dispatch
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    failure: Option<String>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every dispatch with `error`, recording nothing
    pub fn failing(error: &str) -> Self {
        Self {
            failure: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, message: &str) -> Result<()> {
        if let Some(error) = &self.failure {
            return Err(anyhow::anyhow!(error.clone()));
        }

        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
