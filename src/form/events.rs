//! Event-driven notification for form state changes.
//!
//! Every mutation of the form flows through a [`FormEvent`]; observers
//! registered on the controller receive each event after it is applied,
//! which is how a presentation binding learns to re-render without
//! polling.

use super::fields::ContactField;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Events that drive the contact form state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FormEvent {
    /// The user edited one field.
    FieldEdited { field: ContactField, value: String },
    /// A submit attempt failed validation; per-field messages attached.
    SubmissionRejected {
        errors: HashMap<ContactField, String>,
    },
    /// Validation passed and the transport call is starting.
    SubmissionStarted,
    /// The transport confirmed delivery.
    SubmissionSucceeded,
    /// The transport reported a failure; the banner message attached.
    SubmissionFailed { message: String },
    /// The success banner display window elapsed.
    SuccessDismissed,
    /// The form was returned to its initial state.
    Reset,
}

impl FormEvent {
    /// Human-readable description of the event for logs.
    pub fn description(&self) -> String {
        match self {
            FormEvent::FieldEdited { field, .. } => format!("Field '{field}' edited"),
            FormEvent::SubmissionRejected { errors } => {
                format!("Submission rejected: {} invalid field(s)", errors.len())
            }
            FormEvent::SubmissionStarted => "Submission started".to_string(),
            FormEvent::SubmissionSucceeded => "Message delivered".to_string(),
            FormEvent::SubmissionFailed { message } => format!("Delivery failed: {message}"),
            FormEvent::SuccessDismissed => "Success banner dismissed".to_string(),
            FormEvent::Reset => "Form reset".to_string(),
        }
    }
}

/// Event with capture time, for the controller's journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimestampedEvent {
    pub timestamp: DateTime<Utc>,
    pub event: FormEvent,
}

impl TimestampedEvent {
    /// Stamp an event with the current time.
    pub fn new(event: FormEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Observer for form events.
#[async_trait]
pub trait FormObserver: Send + Sync {
    /// Called after the event has been applied to the form state.
    async fn on_event(&self, event: &FormEvent);
}

/// Observer that logs every event through `tracing`.
pub struct LoggingObserver;

#[async_trait]
impl FormObserver for LoggingObserver {
    async fn on_event(&self, event: &FormEvent) {
        info!("{}", event.description());
    }
}
