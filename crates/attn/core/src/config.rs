//! Validator configuration.

use crate::kinds::{BLOCK_EVENT_KIND, is_attn_kind, is_supporting_kind};
use std::env;
use thiserror::Error;

/// Environment variable selecting the block event kind.
pub const ENV_BLOCK_EVENT_KIND: &str = "ATTN_BLOCK_EVENT_KIND";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid ATTN_BLOCK_EVENT_KIND: {0}")]
    InvalidBlockEventKindValue(String),

    #[error("block event kind {0} is not addressable (must be 30000-39999)")]
    BlockKindNotAddressable(u16),

    #[error("block event kind {0} collides with an ATTN or supporting kind")]
    BlockKindCollision(u16),
}

/// Deployment-specific validator settings.
///
/// The validator is otherwise a pure function of the event; this only decides
/// which numeric kind carries the `org.cityprotocol:block:` namespace. The
/// kind is only set through [`ValidatorConfig::new`] or
/// [`ValidatorConfig::with_block_event_kind`], so it is always addressable and
/// never shadows another accepted kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatorConfig {
    block_event_kind: u16,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            block_event_kind: BLOCK_EVENT_KIND,
        }
    }
}

impl ValidatorConfig {
    pub fn new(block_event_kind: u16) -> Result<Self, ConfigError> {
        Self::default().with_block_event_kind(block_event_kind)
    }

    pub fn block_event_kind(&self) -> u16 {
        self.block_event_kind
    }

    pub fn with_block_event_kind(mut self, block_event_kind: u16) -> Result<Self, ConfigError> {
        if !(30000..=39999).contains(&block_event_kind) {
            return Err(ConfigError::BlockKindNotAddressable(block_event_kind));
        }
        if is_attn_kind(block_event_kind) || is_supporting_kind(block_event_kind) {
            return Err(ConfigError::BlockKindCollision(block_event_kind));
        }
        self.block_event_kind = block_event_kind;
        Ok(self)
    }

    /// Load from `ATTN_BLOCK_EVENT_KIND`, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let block_event_kind = env::var(ENV_BLOCK_EVENT_KIND)
            .unwrap_or_else(|_| BLOCK_EVENT_KIND.to_string())
            .trim()
            .parse::<u16>()
            .map_err(|error| ConfigError::InvalidBlockEventKindValue(error.to_string()))?;
        Self::new(block_event_kind)
    }
}
