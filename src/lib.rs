//! # Freshpress
//!
//! Headless contact-form engine for the FreshPress Laundry site: field
//! validation, an explicit submission state machine and the outbound
//! message transport boundary, with no rendering layer attached. A
//! presentation binding reads snapshots, pushes field edits and triggers
//! submissions; everything else lives here.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use freshpress::form::{ContactField, ContactFormController, SubmitOutcome};
//! use freshpress::transport::SimulatedTransport;
//!
//! # async fn example() {
//! let controller = ContactFormController::new(Arc::new(SimulatedTransport::default()));
//!
//! controller.set_field(ContactField::Name, "John Doe").await;
//! controller.set_field(ContactField::Email, "john@example.com").await;
//! controller.set_field(ContactField::Phone, "(555) 123-4567").await;
//! controller.set_field(ContactField::Service, "laundry").await;
//! controller.set_field(ContactField::Message, "Weekly pickup please").await;
//!
//! match controller.submit().await {
//!     SubmitOutcome::Sent => println!("delivered"),
//!     outcome => println!("not delivered: {outcome:?}"),
//! }
//! # }
//! ```
//!
//! ## Modules
//!
//! - `config` - Engine timing configuration and fixed business data
//! - `coverage` - Service-area ZIP code lookup
//! - `error` - Transport error taxonomy
//! - `form` - Form state container, events and the submission workflow
//! - `transport` - Trait-based outbound send abstraction with simulated and mock implementations
//! - `validation` - Pure field validators
pub mod config;
pub mod coverage;
pub mod error;
pub mod form;
pub mod transport;
pub mod validation;
