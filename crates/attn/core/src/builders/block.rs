use super::{BuildError, block_height_tag, template, value_tags};
use crate::content::BlockContent;
use crate::grammar::format_block_identifier;
use crate::kinds::BLOCK_EVENT_KIND;
use crate::nip01::EventTemplate;

/// Builder for the block event published by the clock service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockBuilder {
    pub height: u64,
    pub hash: String,
    pub block_event_kind: u16,
    pub relays: Vec<String>,
}

impl BlockBuilder {
    pub fn new(height: u64, hash: impl Into<String>) -> Self {
        Self {
            height,
            hash: hash.into(),
            block_event_kind: BLOCK_EVENT_KIND,
            relays: Vec::new(),
        }
    }

    pub fn with_block_event_kind(mut self, block_event_kind: u16) -> Self {
        self.block_event_kind = block_event_kind;
        self
    }

    pub fn add_relay(mut self, relay: impl Into<String>) -> Self {
        self.relays.push(relay.into());
        self
    }

    /// The `d` value other events reference this block by.
    pub fn identifier(&self) -> String {
        format_block_identifier(self.height, &self.hash)
    }

    pub fn content(&self) -> Result<BlockContent, BuildError> {
        if self.hash.is_empty() {
            return Err(BuildError::MissingField("hash"));
        }
        let height = i64::try_from(self.height).map_err(|_| BuildError::OutOfRange {
            field: "height",
            constraint: "representable as a signed 64-bit integer",
            value: i128::from(self.height),
        })?;
        Ok(BlockContent {
            height,
            hash: self.hash.clone(),
        })
    }

    pub fn to_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        self.content()?;
        let mut tags = vec![
            vec!["d".to_string(), self.identifier()],
            block_height_tag(self.height),
        ];
        tags.extend(value_tags("r", &self.relays));
        Ok(tags)
    }

    pub fn to_event_template(&self, created_at: u64) -> Result<EventTemplate, BuildError> {
        template(
            self.block_event_kind,
            self.to_tags()?,
            &self.content()?,
            created_at,
        )
    }
}
