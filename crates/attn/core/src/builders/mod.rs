//! Event builders for the ATTN kinds, the block event, and NIP-51 lists.
//!
//! Builders derive every tag from the typed content (ids, pubkeys, coordinates)
//! so the tags and the JSON payload cannot disagree. Each builder exposes
//! `to_tags()` and `to_event_template(created_at)`; signing goes through
//! [`finalize_attn_event`], which refuses to return an event the validator
//! would reject.

mod block;
mod listing;
mod lists;
mod matching;

pub use block::BlockBuilder;
pub use listing::{AttentionBuilder, BillboardBuilder, MarketplaceBuilder, PromotionBuilder};
pub use lists::{ListBuilder, ListType, list_coordinate};
pub use matching::{
    ConfirmationBuilder, ConfirmationSide, DealEvents, MarketplaceConfirmationBuilder,
    MatchBuilder, PaymentConfirmationBuilder,
};

use crate::config::ValidatorConfig;
use crate::grammar::{FormatError, format_identifier};
use crate::nip01::{Event, EventTemplate, Nip01Error};
use crate::validate::{ValidationError, check_event};
use serde::Serialize;
use thiserror::Error;
#[cfg(feature = "full")]
use tracing::debug;

/// Errors for builder operations.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid identifier: {0}")]
    Format(#[from] FormatError),

    #[error("missing required builder field: {0}")]
    MissingField(&'static str),

    #[error("{field} must be {constraint}, got {value}")]
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
        value: i128,
    },

    #[error("unknown list identifier: {0}")]
    UnknownList(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("built event failed validation: {0}")]
    Rejected(#[from] ValidationError),

    #[error(transparent)]
    Nip01(#[from] Nip01Error),
}

pub(crate) fn identifier_tag(kind: u16, id: &str) -> Result<Vec<String>, BuildError> {
    Ok(vec!["d".to_string(), format_identifier(kind, id)?])
}

/// Block heights are written as plain base-10 integers.
pub(crate) fn block_height_tag(block_height: u64) -> Vec<String> {
    vec!["t".to_string(), block_height.to_string()]
}

pub(crate) fn value_tags<S: AsRef<str>>(name: &str, values: &[S]) -> Vec<Vec<String>> {
    values
        .iter()
        .map(|value| vec![name.to_string(), value.as_ref().to_string()])
        .collect()
}

/// NIP-10 style `["e", <id>, <relay>, <marker>]`.
pub(crate) fn marked_event_tag(event_id: &str, relay: &str, marker: &str) -> Vec<String> {
    vec![
        "e".to_string(),
        event_id.to_string(),
        relay.to_string(),
        marker.to_string(),
    ]
}

pub(crate) fn require_values<S>(field: &'static str, values: &[S]) -> Result<(), BuildError> {
    if values.is_empty() {
        return Err(BuildError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: i64) -> Result<(), BuildError> {
    if value <= 0 {
        return Err(BuildError::OutOfRange {
            field,
            constraint: "greater than 0",
            value: i128::from(value),
        });
    }
    Ok(())
}

pub(crate) fn template<T: Serialize>(
    kind: u16,
    tags: Vec<Vec<String>>,
    content: &T,
    created_at: u64,
) -> Result<EventTemplate, BuildError> {
    let content = serde_json::to_string(content)
        .map_err(|error| BuildError::Serialization(error.to_string()))?;
    Ok(EventTemplate {
        created_at,
        kind,
        tags,
        content,
    })
}

/// Run the validator over an unsigned template.
///
/// Validation only reads `kind`, `tags`, and `content`, so a template can be
/// checked before a key is available.
pub fn check_template(
    template: &EventTemplate,
    config: &ValidatorConfig,
) -> Result<(), ValidationError> {
    let event = Event {
        id: String::new(),
        pubkey: String::new(),
        created_at: template.created_at,
        kind: template.kind,
        tags: template.tags.clone(),
        content: template.content.clone(),
        sig: String::new(),
    };
    check_event(&event, config).map(drop)
}

/// Sign `template` and validate the result.
#[cfg(feature = "full")]
pub fn finalize_attn_event(
    template: &EventTemplate,
    secret_key: &[u8; 32],
    config: &ValidatorConfig,
) -> Result<Event, BuildError> {
    let event = crate::nip01::finalize_event(template, secret_key)?;
    if let Err(error) = check_event(&event, config) {
        debug!(
            event_id = %event.id,
            kind = event.kind,
            reason = %error,
            "refusing to publish invalid event"
        );
        return Err(error.into());
    }
    Ok(event)
}
