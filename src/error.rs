//! Error taxonomy for the contact form engine.
//!
//! Field validation failures are ordinary data, recorded as per-field
//! messages on the form state, and are never surfaced as `Err`. The types
//! here cover the transport boundary; configuration loading propagates
//! `anyhow::Result` at the call site instead.

use thiserror::Error;

/// Failure reported by a message transport.
///
/// Transport failures are whole-form and recoverable: the controller maps
/// them to a single banner message without discarding user input, and the
/// user may retry.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport attempted delivery and failed.
    #[error("delivery failed: {message}")]
    Delivery {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The transport could not be reached at all.
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

impl TransportError {
    /// Create a delivery error with no underlying source.
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
            source: None,
        }
    }

    /// Create a delivery error wrapping an underlying cause.
    pub fn delivery_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Delivery {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_display() {
        let err = TransportError::delivery("connection reset");
        assert_eq!(err.to_string(), "delivery failed: connection reset");
    }

    #[test]
    fn test_delivery_error_preserves_source() {
        let io_err = std::io::Error::other("socket closed");
        let err = TransportError::delivery_with_source("connection reset", io_err);
        let source = std::error::Error::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), "socket closed");
    }

    #[test]
    fn test_unavailable_display() {
        let err = TransportError::Unavailable("no route to host".to_string());
        assert_eq!(err.to_string(), "transport unavailable: no route to host");
    }
}
