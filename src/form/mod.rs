//! Contact form state container and submission workflow.
//!
//! The form is modelled as an explicit state object ([`FormState`]) plus a
//! pure transition function over [`FormEvent`]s, so the same machine can
//! be driven identically from any presentation binding or straight from
//! tests without a rendering environment. [`ContactFormController`] wraps
//! the machine with the async submission workflow and observer
//! notification.

pub mod controller;
pub mod events;
pub mod fields;
pub mod state;

pub use controller::{ContactFormController, SubmitOutcome, DELIVERY_FAILED_MESSAGE};
pub use events::{FormEvent, FormObserver, LoggingObserver, TimestampedEvent};
pub use fields::{ContactField, FieldValues};
pub use state::{FormState, SubmissionPhase};
