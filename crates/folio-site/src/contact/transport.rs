#![forbid(unsafe_code)]

//! Delivery of contact messages.
//!
//! A transport turns a [`ContactPayload`] into a command that eventually
//! yields the delivery outcome. The simulated transport resolves through a
//! delay on the host clock; the browser transport in `folio-web` runs a
//! `fetch` task and posts the result back through the task's mailbox.

use std::time::Duration;

use folio_runtime::{CancellationToken, Cmd};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Why a delivery attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("delivery timed out")]
    Timeout,
    #[error("endpoint rejected the message with status {status}")]
    Rejected { status: u16 },
    #[error("delivery cancelled")]
    Cancelled,
}

impl DeliveryError {
    /// Translation key of the user-facing explanation.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Network(_) | Self::Cancelled => "contact.failure.network",
            Self::Timeout => "contact.failure.timeout",
            Self::Rejected { .. } => "contact.failure.rejected",
        }
    }

    /// Client errors will fail the same way again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            Self::Rejected { status } => *status >= 500 || *status == 429,
            Self::Cancelled => false,
        }
    }
}

/// Outcome delivered back to the form.
pub type DeliveryResult = Result<(), DeliveryError>;

/// The JSON body sent to a delivery endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    /// # Errors
    ///
    /// Only if serialization itself fails, which plain strings never do.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Sends contact messages somewhere.
pub trait ContactTransport {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Start one delivery. The returned command yields exactly one
    /// [`DeliveryResult`] unless `token` is cancelled first, in which case
    /// the transport should stop work and may yield nothing.
    fn send(&self, payload: ContactPayload, token: CancellationToken) -> Cmd<DeliveryResult>;
}

/// Stand-in transport: waits a fixed time on the host clock and reports a
/// fixed outcome.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    outcome: DeliveryResult,
}

impl SimulatedTransport {
    /// Always succeeds after `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            outcome: Ok(()),
        }
    }

    /// Always fails with `error` after `delay`.
    #[must_use]
    pub fn failing(delay: Duration, error: DeliveryError) -> Self {
        Self {
            delay,
            outcome: Err(error),
        }
    }
}

impl ContactTransport for SimulatedTransport {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn send(&self, payload: ContactPayload, _token: CancellationToken) -> Cmd<DeliveryResult> {
        debug!(
            email = %payload.email,
            delay_ms = self.delay.as_millis() as u64,
            "simulating contact delivery"
        );
        Cmd::delay(self.delay, self.outcome.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_json_shape() {
        let payload = ContactPayload {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            message: "Olá \"mundo\"".into(),
        };
        let json = payload.to_json().unwrap();
        let back: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back["name"], "Ana");
        assert_eq!(back["message"], "Olá \"mundo\"");
    }

    #[test]
    fn retryable_classification() {
        assert!(DeliveryError::Timeout.is_retryable());
        assert!(DeliveryError::Network("reset".into()).is_retryable());
        assert!(DeliveryError::Rejected { status: 503 }.is_retryable());
        assert!(DeliveryError::Rejected { status: 429 }.is_retryable());
        assert!(!DeliveryError::Rejected { status: 400 }.is_retryable());
        assert!(!DeliveryError::Cancelled.is_retryable());
    }

    #[test]
    fn simulated_send_is_a_delay() {
        let transport = SimulatedTransport::new(Duration::from_millis(1000));
        let source = folio_runtime::CancellationSource::new();
        let cmd = transport.send(
            ContactPayload {
                name: "a".into(),
                email: "a@b.co".into(),
                message: "m".into(),
            },
            source.token(),
        );
        assert!(matches!(cmd, Cmd::Delay(d, Ok(())) if d == Duration::from_millis(1000)));
    }
}
