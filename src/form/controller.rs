//! Submission workflow orchestration.

use super::events::{FormEvent, FormObserver, TimestampedEvent};
use super::fields::ContactField;
use super::state::FormState;
use crate::config::EngineConfig;
use crate::transport::{ContactMessage, MessageTransport};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Banner message shown when the transport fails. Per-field errors are
/// never set on this path; user input is preserved for a retry.
pub const DELIVERY_FAILED_MESSAGE: &str = "Could not send message, please try again.";

/// Outcome of a [`ContactFormController::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight; the call was ignored.
    InFlight,
    /// Validation failed; per-field errors were recorded and no transport
    /// call was made.
    Invalid,
    /// The transport confirmed delivery.
    Sent,
    /// The transport failed; the banner error was recorded and the input
    /// preserved.
    Failed,
}

/// Drives one contact form instance: holds its state, runs the submission
/// workflow against the injected transport, and notifies observers after
/// every applied event.
///
/// The submission lifecycle:
///
/// ```text
/// Idle --submit(valid)--> Submitting --transport ok--> Succeeded --timer--> Idle
/// Idle --submit(invalid)--> Idle          (field errors recorded)
/// Submitting --transport err--> Idle      (banner error, input preserved)
/// Submitting --submit--> Submitting       (ignored)
/// ```
///
/// The deferred `Succeeded -> Idle` transition runs on a cancellable task;
/// dropping the controller (or a new accepted submission) aborts it so a
/// discarded instance is never mutated.
pub struct ContactFormController {
    state: Arc<RwLock<FormState>>,
    transport: Arc<dyn MessageTransport>,
    observers: Arc<RwLock<Vec<Arc<dyn FormObserver>>>>,
    journal: Arc<RwLock<Vec<TimestampedEvent>>>,
    success_display: Duration,
    banner_timer: Mutex<Option<JoinHandle<()>>>,
}

impl ContactFormController {
    /// Controller with the default timing configuration.
    pub fn new(transport: Arc<dyn MessageTransport>) -> Self {
        Self::with_config(transport, EngineConfig::default())
    }

    /// Controller with explicit timing configuration.
    pub fn with_config(transport: Arc<dyn MessageTransport>, config: EngineConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(FormState::default())),
            transport,
            observers: Arc::new(RwLock::new(Vec::new())),
            journal: Arc::new(RwLock::new(Vec::new())),
            success_display: config.success_display,
            banner_timer: Mutex::new(None),
        }
    }

    /// Register an observer; it receives every event after it is applied.
    pub async fn add_observer(&self, observer: Arc<dyn FormObserver>) {
        self.observers.write().await.push(observer);
    }

    /// Record one field edit. The stale validation error for the edited
    /// field, if any, is dropped immediately.
    pub async fn set_field(&self, field: ContactField, value: impl Into<String>) {
        self.apply_and_publish(FormEvent::FieldEdited {
            field,
            value: value.into(),
        })
        .await;
    }

    /// Detached copy of the current form state. Read-only, no side effect.
    pub async fn snapshot(&self) -> FormState {
        self.state.read().await.clone()
    }

    /// Events recorded so far, oldest first.
    pub async fn event_log(&self) -> Vec<TimestampedEvent> {
        self.journal.read().await.clone()
    }

    /// Return the form to its initial state and drop any pending
    /// success-banner dismissal.
    pub async fn reset(&self) {
        self.cancel_banner_timer().await;
        self.apply_and_publish(FormEvent::Reset).await;
    }

    /// Run the submission workflow: guard against re-entry, validate every
    /// field, then hand the message to the transport and track the phase.
    pub async fn submit(&self) -> SubmitOutcome {
        // Guard, validation and the Submitting transition happen under one
        // write lock with no await between them, so a racing submit
        // observes the in-flight phase.
        let message = {
            let mut state = self.state.write().await;
            if state.phase.is_in_flight() {
                debug!("submit ignored: a submission is already in flight");
                return SubmitOutcome::InFlight;
            }

            let errors = state.values.validate();
            if !errors.is_empty() {
                let event = FormEvent::SubmissionRejected { errors };
                state.apply(&event);
                drop(state);
                self.publish(event).await;
                return SubmitOutcome::Invalid;
            }

            let message = ContactMessage::from(&state.values);
            state.apply(&FormEvent::SubmissionStarted);
            message
        };
        self.publish(FormEvent::SubmissionStarted).await;
        self.cancel_banner_timer().await;

        match self.transport.send(&message).await {
            Ok(()) => {
                self.apply_and_publish(FormEvent::SubmissionSucceeded).await;
                self.schedule_banner_dismissal().await;
                SubmitOutcome::Sent
            }
            Err(err) => {
                warn!(error = %err, "contact message delivery failed");
                self.apply_and_publish(FormEvent::SubmissionFailed {
                    message: DELIVERY_FAILED_MESSAGE.to_string(),
                })
                .await;
                SubmitOutcome::Failed
            }
        }
    }

    /// Abort the pending success-banner dismissal, if any. Called on
    /// teardown; also safe to call at any other time.
    pub async fn shutdown(&self) {
        self.cancel_banner_timer().await;
    }

    async fn apply_and_publish(&self, event: FormEvent) {
        self.state.write().await.apply(&event);
        self.publish(event).await;
    }

    async fn publish(&self, event: FormEvent) {
        publish_to(&self.journal, &self.observers, event).await;
    }

    /// Schedule the deferred `Succeeded -> Idle` transition. The handle is
    /// kept so teardown or a new submission can cancel it.
    async fn schedule_banner_dismissal(&self) {
        let state = Arc::clone(&self.state);
        let journal = Arc::clone(&self.journal);
        let observers = Arc::clone(&self.observers);
        let delay = self.success_display;

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            let event = FormEvent::SuccessDismissed;
            state.write().await.apply(&event);
            publish_to(&journal, &observers, event).await;
        });

        let mut timer = self.banner_timer.lock().await;
        if let Some(previous) = timer.replace(handle) {
            previous.abort();
        }
    }

    async fn cancel_banner_timer(&self) {
        let mut timer = self.banner_timer.lock().await;
        if let Some(handle) = timer.take() {
            handle.abort();
        }
    }
}

impl Drop for ContactFormController {
    fn drop(&mut self) {
        // Nothing else can hold the timer slot once the controller is
        // being dropped, so try_lock always succeeds here.
        if let Ok(mut timer) = self.banner_timer.try_lock() {
            if let Some(handle) = timer.take() {
                handle.abort();
            }
        }
    }
}

async fn publish_to(
    journal: &RwLock<Vec<TimestampedEvent>>,
    observers: &RwLock<Vec<Arc<dyn FormObserver>>>,
    event: FormEvent,
) {
    journal
        .write()
        .await
        .push(TimestampedEvent::new(event.clone()));
    for observer in observers.read().await.iter() {
        observer.on_event(&event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SubmissionPhase;
    use crate::transport::MockTransport;

    fn controller(transport: Arc<MockTransport>) -> ContactFormController {
        // Short banner window keeps the timer path testable without
        // waiting on the reference five seconds.
        let config = EngineConfig {
            success_display: Duration::from_millis(20),
            ..EngineConfig::default()
        };
        ContactFormController::with_config(transport, config)
    }

    async fn fill_valid(controller: &ContactFormController) {
        controller.set_field(ContactField::Name, "John Doe").await;
        controller
            .set_field(ContactField::Email, "john@example.com")
            .await;
        controller
            .set_field(ContactField::Phone, "(555) 123-4567")
            .await;
        controller.set_field(ContactField::Service, "laundry").await;
        controller
            .set_field(ContactField::Message, "Weekly pickup please")
            .await;
    }

    #[tokio::test]
    async fn test_set_field_updates_snapshot() {
        let ctrl = controller(Arc::new(MockTransport::new()));
        ctrl.set_field(ContactField::Name, "John").await;
        let snapshot = ctrl.snapshot().await;
        assert_eq!(snapshot.values.name, "John");
        assert_eq!(snapshot.phase, SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn test_invalid_submit_records_errors_without_transport_call() {
        let transport = Arc::new(MockTransport::new());
        let ctrl = controller(Arc::clone(&transport));
        ctrl.set_field(ContactField::Name, "John").await;

        let outcome = ctrl.submit().await;
        assert_eq!(outcome, SubmitOutcome::Invalid);

        let snapshot = ctrl.snapshot().await;
        assert_eq!(snapshot.phase, SubmissionPhase::Idle);
        assert_eq!(snapshot.errors.len(), 4);
        assert!(!snapshot.errors.contains_key(&ContactField::Name));
        assert_eq!(transport.send_count().await, 0);
    }

    #[tokio::test]
    async fn test_valid_submit_delivers_and_resets_values() {
        let transport = Arc::new(MockTransport::new());
        let ctrl = controller(Arc::clone(&transport));
        fill_valid(&ctrl).await;

        let outcome = ctrl.submit().await;
        assert_eq!(outcome, SubmitOutcome::Sent);

        let snapshot = ctrl.snapshot().await;
        assert!(snapshot.phase.is_succeeded());
        assert_eq!(snapshot.values.name, "");
        assert!(snapshot.errors.is_empty());

        let sent = transport.sent_messages().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "john@example.com");
    }

    #[tokio::test]
    async fn test_transport_failure_preserves_input_and_sets_banner() {
        let transport = Arc::new(MockTransport::new());
        transport.push_failure("connection reset").await;
        let ctrl = controller(Arc::clone(&transport));
        fill_valid(&ctrl).await;

        let outcome = ctrl.submit().await;
        assert_eq!(outcome, SubmitOutcome::Failed);

        let snapshot = ctrl.snapshot().await;
        assert_eq!(snapshot.phase, SubmissionPhase::Idle);
        assert_eq!(snapshot.values.name, "John Doe");
        assert!(snapshot.errors.is_empty());
        assert_eq!(
            snapshot.transport_error.as_deref(),
            Some(DELIVERY_FAILED_MESSAGE)
        );

        // Retry goes through once the transport recovers.
        assert_eq!(ctrl.submit().await, SubmitOutcome::Sent);
        assert_eq!(transport.send_count().await, 2);
        assert!(ctrl.snapshot().await.transport_error.is_none());
    }

    #[tokio::test]
    async fn test_journal_records_the_workflow() {
        let ctrl = controller(Arc::new(MockTransport::new()));
        fill_valid(&ctrl).await;
        ctrl.submit().await;

        let log = ctrl.event_log().await;
        let descriptions: Vec<String> =
            log.iter().map(|entry| entry.event.description()).collect();
        assert!(descriptions.contains(&"Submission started".to_string()));
        assert!(descriptions.contains(&"Message delivered".to_string()));
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let ctrl = controller(Arc::new(MockTransport::new()));
        ctrl.set_field(ContactField::Name, "John").await;
        ctrl.submit().await;
        ctrl.reset().await;

        let snapshot = ctrl.snapshot().await;
        assert_eq!(snapshot, FormState::default());
    }
}
