//! Form state container and the pure transition function.

use super::events::FormEvent;
use super::fields::{ContactField, FieldValues};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle of a submission attempt. Exactly one value at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionPhase {
    /// Waiting for input. The initial state, and the state reached after
    /// the success banner clears or a delivery failure.
    #[default]
    Idle,
    /// Validation passed and the transport call is outstanding.
    Submitting,
    /// The transport confirmed delivery; the success banner is visible.
    Succeeded,
}

impl SubmissionPhase {
    /// True while the transport call is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }

    /// True while the success banner is visible.
    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionPhase::Succeeded)
    }
}

/// The whole observable state of the contact form: current field values,
/// per-field errors, the submission phase and the whole-form transport
/// error banner.
///
/// A field has an entry in `errors` iff its last validation failed, and
/// any edit to a field drops that field's entry immediately, so errors
/// never stick to input the user is actively fixing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub values: FieldValues,
    pub errors: HashMap<ContactField, String>,
    pub phase: SubmissionPhase,
    /// Whole-form delivery failure banner, distinct from per-field errors.
    pub transport_error: Option<String>,
}

impl FormState {
    /// Apply one event. This is the single transition function; every
    /// mutation of form state flows through here, so the invariants hold
    /// by construction regardless of which binding drives the form.
    pub fn apply(&mut self, event: &FormEvent) {
        match event {
            FormEvent::FieldEdited { field, value } => {
                self.values.set(*field, value.clone());
                self.errors.remove(field);
            }
            FormEvent::SubmissionRejected { errors } => {
                self.errors = errors.clone();
            }
            FormEvent::SubmissionStarted => {
                self.phase = SubmissionPhase::Submitting;
                self.errors.clear();
                self.transport_error = None;
            }
            FormEvent::SubmissionSucceeded => {
                self.phase = SubmissionPhase::Succeeded;
                self.values = FieldValues::default();
                self.errors.clear();
            }
            FormEvent::SubmissionFailed { message } => {
                // Input is preserved so the user can retry.
                self.phase = SubmissionPhase::Idle;
                self.transport_error = Some(message.clone());
            }
            FormEvent::SuccessDismissed => {
                if self.phase == SubmissionPhase::Succeeded {
                    self.phase = SubmissionPhase::Idle;
                }
            }
            FormEvent::Reset => *self = FormState::default(),
        }
    }
}
