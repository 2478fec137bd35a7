//! ATTN event validation.
//!
//! Internal module boundaries:
//! - `checks`: individual tag/content checks shared by every kind
//! - `listing`: marketplace, billboard, promotion, attention
//! - `matching`: match and the four confirmation kinds
//! - `block`: the externally authored block event
//!
//! Every check short-circuits on the first violation. Validation is a pure
//! function of the event and the [`ValidatorConfig`]; it holds no state and can
//! run concurrently from any number of threads.

mod block;
mod checks;
mod listing;
mod matching;

use crate::config::ValidatorConfig;
use crate::grammar::FormatError;
use crate::kinds::{AttnKind, is_official_tag, is_supporting_kind};
use crate::nip01::Event;
use crate::tag_parsing::tag_name;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

pub(crate) use block::check_block;
pub(crate) use listing::{check_attention, check_billboard, check_marketplace, check_promotion};
pub(crate) use matching::{
    check_attention_confirmation, check_attention_payment_confirmation,
    check_billboard_confirmation, check_marketplace_confirmation, check_match,
};

/// Reasons an event is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event kind {0} is not accepted; see the list of supported kinds")]
    KindRejected(u16),

    #[error("Tag `{0}` is not an official ATTN tag (allowed: d, t, a, e, p, r, k, u)")]
    UnofficialTag(String),

    #[error("Missing d tag (identifier)")]
    MissingIdentifier,

    #[error("Invalid d tag identifier: {0}")]
    InvalidIdentifier(FormatError),

    #[error("Missing t tag (block height)")]
    MissingBlockHeight,

    #[error("Block height in t tag is not a non-negative base-10 integer: `{0}`")]
    NonNumericBlockHeight(String),

    #[error("Missing {label} coordinate (a tag referencing kind {kind})")]
    MissingCoordinate { label: &'static str, kind: u16 },

    #[error("Invalid {label} coordinate: {error}")]
    InvalidCoordinate {
        label: &'static str,
        error: FormatError,
    },

    #[error("Missing {label} list coordinate (a tag `30000:<pubkey>:...{suffix}`)")]
    MissingListCoordinate {
        label: &'static str,
        suffix: &'static str,
    },

    #[error("Missing e tag with `{0}` marker")]
    MissingMarkedReference(&'static str),

    #[error("Expected at least {required} e tags (event references), found {found}")]
    InsufficientEventReferences { required: usize, found: usize },

    #[error("Expected at least {required} {tag} tags ({what}), found {found}")]
    InsufficientTags {
        tag: &'static str,
        what: &'static str,
        required: usize,
        found: usize,
    },

    #[error("Expected exactly {expected} {tag} tag ({what}), found {found}")]
    TagCountMismatch {
        tag: &'static str,
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid JSON content: {0}")]
    InvalidJson(String),

    #[error("Content must be a JSON object")]
    ContentNotObject,

    #[error("Missing required content field: {0}")]
    MissingContentField(&'static str),

    #[error("Content field {field} must be {expected}")]
    ContentFieldType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Content could not be decoded: {0}")]
    ContentDecode(String),

    #[error("Content field {field} {constraint}")]
    ContentRange {
        field: &'static str,
        constraint: String,
    },

    #[error("Block identifier `{identifier}` does not match block height {height}")]
    BlockIdentifierMismatch { identifier: String, height: u64 },
}

/// Header fields and decoded content of an event that passed its kind's checks.
#[derive(Debug)]
pub(crate) struct Checked<'a, T> {
    pub d_tag: &'a str,
    pub block_height: u64,
    pub content: T,
}

/// Outcome of validating one event. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    fn for_kind(kind: AttnKind, outcome: Result<(), ValidationError>) -> Self {
        match outcome {
            Ok(()) => Self::valid(format!("Valid {} event", kind.display_name())),
            Err(error) => Self::from(error),
        }
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(error: ValidationError) -> Self {
        Self::invalid(error.to_string())
    }
}

impl AttnKind {
    /// Run this kind's validator against `event`, ignoring `event.kind`.
    pub fn validate(self, event: &Event, config: &ValidatorConfig) -> Result<(), ValidationError> {
        match self {
            Self::Marketplace => check_marketplace(event, config).map(drop),
            Self::Billboard => check_billboard(event, config).map(drop),
            Self::Promotion => check_promotion(event, config).map(drop),
            Self::Attention => check_attention(event, config).map(drop),
            Self::BillboardConfirmation => check_billboard_confirmation(event, config).map(drop),
            Self::AttentionConfirmation => check_attention_confirmation(event, config).map(drop),
            Self::MarketplaceConfirmation => {
                check_marketplace_confirmation(event, config).map(drop)
            }
            Self::Match => check_match(event, config).map(drop),
            Self::AttentionPaymentConfirmation => {
                check_attention_payment_confirmation(event, config).map(drop)
            }
            Self::Block => check_block(event, config).map(drop),
        }
    }
}

/// Reject any tag name outside `d,t,a,e,p,r,k,u`.
pub fn check_official_tags(event: &Event) -> Result<(), ValidationError> {
    for tag in &event.tags {
        let name = tag_name(tag).unwrap_or_default();
        if !is_official_tag(name) {
            return Err(ValidationError::UnofficialTag(name.to_string()));
        }
    }
    Ok(())
}

/// Classify and validate an event.
///
/// Returns the resolved kind for ATTN/block events and `None` for supporting
/// Nostr kinds, which are accepted without structural checks.
pub fn check_event(
    event: &Event,
    config: &ValidatorConfig,
) -> Result<Option<AttnKind>, ValidationError> {
    let Some(kind) = AttnKind::from_kind(event.kind, config) else {
        if is_supporting_kind(event.kind) {
            return Ok(None);
        }
        return Err(ValidationError::KindRejected(event.kind));
    };
    check_official_tags(event)?;
    kind.validate(event, config)?;
    Ok(Some(kind))
}

/// Validate an event using the default configuration.
pub fn validate_event(event: &Event) -> ValidationResult {
    validate_event_with(event, &ValidatorConfig::default())
}

/// Validate an event using an explicit configuration.
pub fn validate_event_with(event: &Event, config: &ValidatorConfig) -> ValidationResult {
    match check_event(event, config) {
        Ok(Some(kind)) => ValidationResult::for_kind(kind, Ok(())),
        Ok(None) => ValidationResult::valid(format!("Supporting kind {} accepted", event.kind)),
        Err(error) => {
            trace!(kind = event.kind, reason = %error, "event failed validation");
            ValidationResult::from(error)
        }
    }
}

macro_rules! kind_validator {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        pub fn $name(event: &Event, config: &ValidatorConfig) -> ValidationResult {
            ValidationResult::for_kind($kind, $kind.validate(event, config))
        }
    };
}

kind_validator!(
    /// Validate a Marketplace event (kind 38188).
    validate_marketplace,
    AttnKind::Marketplace
);
kind_validator!(
    /// Validate a Billboard event (kind 38288).
    validate_billboard,
    AttnKind::Billboard
);
kind_validator!(
    /// Validate a Promotion event (kind 38388).
    validate_promotion,
    AttnKind::Promotion
);
kind_validator!(
    /// Validate an Attention event (kind 38488).
    validate_attention,
    AttnKind::Attention
);
kind_validator!(
    /// Validate a Billboard confirmation (kind 38588).
    validate_billboard_confirmation,
    AttnKind::BillboardConfirmation
);
kind_validator!(
    /// Validate an Attention confirmation (kind 38688).
    validate_attention_confirmation,
    AttnKind::AttentionConfirmation
);
kind_validator!(
    /// Validate a Marketplace confirmation (kind 38788).
    validate_marketplace_confirmation,
    AttnKind::MarketplaceConfirmation
);
kind_validator!(
    /// Validate a Match event (kind 38888).
    validate_match,
    AttnKind::Match
);
kind_validator!(
    /// Validate an Attention payment confirmation (kind 38988).
    validate_attention_payment_confirmation,
    AttnKind::AttentionPaymentConfirmation
);
kind_validator!(
    /// Validate a block event (configured block kind).
    validate_block,
    AttnKind::Block
);

#[cfg(test)]
mod tests;
