//! Relay-side ingestion gate.
//!
//! An [`Admission`] decides whether a relay may store and forward an inbound
//! event, and renders the NIP-01 `OK` frame sent back to the publisher.
//! Rejections carry the `invalid:` machine-readable prefix followed by the
//! validator's message verbatim.

use crate::config::ValidatorConfig;
use crate::kinds::AttnKind;
use crate::nip01::Event;
use crate::validate::{ValidationError, ValidationResult, check_event};
use serde_json::{Value, json};
use tracing::{debug, warn};

/// Machine-readable prefix for rejected events.
pub const INVALID_PREFIX: &str = "invalid";

/// Outcome of admitting one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Store and forward. `kind` is `None` for supporting Nostr kinds.
    Accept { kind: Option<AttnKind> },
    /// Do not store or forward; the reason is shown to the publisher.
    Reject { reason: String },
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept { .. })
    }

    /// Human-readable part of the `OK` frame.
    pub fn message(&self) -> String {
        match self {
            Self::Accept { .. } => String::new(),
            Self::Reject { reason } => format!("{INVALID_PREFIX}: {reason}"),
        }
    }

    /// `["OK", <event_id>, <accepted>, <message>]`
    pub fn ok_message(&self, event_id: &str) -> Value {
        json!(["OK", event_id, self.is_accepted(), self.message()])
    }
}

impl From<ValidationResult> for Decision {
    fn from(result: ValidationResult) -> Self {
        if result.valid {
            Self::Accept { kind: None }
        } else {
            Self::Reject {
                reason: result.message,
            }
        }
    }
}

impl From<ValidationError> for Decision {
    fn from(error: ValidationError) -> Self {
        Self::Reject {
            reason: error.to_string(),
        }
    }
}

/// Stateless gate shared by every connection task of a relay.
#[derive(Debug, Clone, Default)]
pub struct Admission {
    config: ValidatorConfig,
    verify_signatures: bool,
}

impl Admission {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            verify_signatures: false,
        }
    }

    /// Also check the event id and Schnorr signature before structure.
    #[cfg(feature = "full")]
    pub fn with_signature_verification(mut self) -> Self {
        self.verify_signatures = true;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn check(&self, event: &Event) -> Decision {
        if let Some(reason) = self.signature_problem(event) {
            warn!(event_id = %event.id, kind = event.kind, reason = %reason, "rejected event");
            return Decision::Reject { reason };
        }

        match check_event(event, &self.config) {
            Ok(kind) => {
                debug!(event_id = %event.id, kind = event.kind, "accepted event");
                Decision::Accept { kind }
            }
            Err(error) => {
                warn!(event_id = %event.id, kind = event.kind, reason = %error, "rejected event");
                Decision::from(error)
            }
        }
    }

    fn signature_problem(&self, event: &Event) -> Option<String> {
        if !self.verify_signatures {
            return None;
        }
        #[cfg(feature = "full")]
        {
            match crate::nip01::verify_event(event) {
                Ok(true) => None,
                Ok(false) => Some("event id or signature does not verify".to_string()),
                Err(error) => Some(error.to_string()),
            }
        }
        #[cfg(not(feature = "full"))]
        {
            let _ = event;
            None
        }
    }
}
