//! Message transport abstraction.
//!
//! The submission workflow talks to the outside world through one narrow
//! trait so tests can substitute an immediate success or failure stub
//! instead of waiting on real timers, and a production host can plug in a
//! real wire transport without touching the workflow.

use crate::config::BusinessInfo;
use crate::error::TransportError;
use crate::form::FieldValues;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, info};

/// A validated contact request ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl From<&FieldValues> for ContactMessage {
    fn from(values: &FieldValues) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            service: values.service.clone(),
            message: values.message.clone(),
        }
    }
}

/// Trait for the outbound send collaborator.
///
/// This is the submission workflow's single suspension point. Failure is
/// recoverable by design: the controller maps an `Err` to the whole-form
/// banner without discarding user input.
///
/// # Examples
///
/// ```rust
/// use freshpress::transport::{ContactMessage, MessageTransport};
///
/// # async fn example(transport: &dyn MessageTransport, message: ContactMessage) -> Result<(), freshpress::error::TransportError> {
/// transport.send(&message).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Deliver one contact message.
    async fn send(&self, message: &ContactMessage) -> Result<(), TransportError>;
}

/// Reference transport: waits a fixed delay and reports success.
///
/// A placeholder for a real wire transport, matching the reference
/// behavior of a 1.5 second simulated round trip that always succeeds.
pub struct SimulatedTransport {
    delay: Duration,
    recipient: String,
}

impl SimulatedTransport {
    /// Simulated transport with an explicit round-trip delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            recipient: BusinessInfo::default().email,
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SEND_DELAY)
    }
}

#[async_trait]
impl MessageTransport for SimulatedTransport {
    async fn send(&self, message: &ContactMessage) -> Result<(), TransportError> {
        debug!(
            payload = %serde_json::to_string(message).unwrap_or_default(),
            "simulating contact message delivery"
        );
        sleep(self.delay).await;
        info!(from = %message.email, to = %self.recipient, "contact message delivered (simulated)");
        Ok(())
    }
}

/// Mock implementation of `MessageTransport` for testing.
///
/// Results are scripted per call; with no script the mock succeeds. Every
/// message handed to `send` is recorded so tests can assert exactly what
/// crossed the boundary, and how many times.
#[derive(Default)]
pub struct MockTransport {
    results: Mutex<Vec<Result<(), TransportError>>>,
    sent: Mutex<Vec<ContactMessage>>,
    delay: Mutex<Option<Duration>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome of the next unscripted call.
    pub async fn push_result(&self, result: Result<(), TransportError>) {
        self.results.lock().await.push(result);
    }

    /// Script a delivery failure for the next call.
    pub async fn push_failure(&self, message: &str) {
        self.push_result(Err(TransportError::delivery(message))).await;
    }

    /// Make every call block for `delay` before resolving, so tests can
    /// observe the in-flight phase.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.lock().await = Some(delay);
    }

    /// Messages handed to `send`, in call order.
    pub async fn sent_messages(&self) -> Vec<ContactMessage> {
        self.sent.lock().await.clone()
    }

    /// Number of times `send` was invoked.
    pub async fn send_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl MessageTransport for MockTransport {
    async fn send(&self, message: &ContactMessage) -> Result<(), TransportError> {
        self.sent.lock().await.push(message.clone());

        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            sleep(delay).await;
        }

        let mut results = self.results.lock().await;
        if results.is_empty() {
            Ok(())
        } else {
            results.remove(0)
        }
    }
}
