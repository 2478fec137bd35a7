use super::{
    BuildError, block_height_tag, identifier_tag, require_positive, require_values, template,
    value_tags,
};
use crate::content::{AttentionContent, BillboardContent, MarketplaceContent, PromotionContent};
use crate::grammar::Coordinate;
use crate::kinds::{
    BLOCK_EVENT_KIND, KIND_ATTENTION, KIND_BILLBOARD, KIND_LIST, KIND_MARKETPLACE,
    KIND_PROMOTION, KIND_VIDEO,
};
use crate::nip01::EventTemplate;

fn marketplace_coordinate(pubkey: &str, id: &str) -> Result<Coordinate, BuildError> {
    Ok(Coordinate::attn(KIND_MARKETPLACE, pubkey, id)?)
}

/// Builder for Marketplace events (kind 38188).
///
/// `content.ref_block_id` is the full `d` value of the anchoring block event
/// and `content.ref_node_pubkey` its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceBuilder {
    pub content: MarketplaceContent,
    pub block_height: u64,
    pub block_event_kind: u16,
    pub relays: Vec<String>,
    pub content_kinds: Vec<u16>,
}

impl MarketplaceBuilder {
    pub fn new(content: MarketplaceContent, block_height: u64) -> Self {
        Self {
            content,
            block_height,
            block_event_kind: BLOCK_EVENT_KIND,
            relays: Vec::new(),
            content_kinds: vec![KIND_VIDEO],
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

    pub fn with_content_kinds(mut self, content_kinds: Vec<u16>) -> Self {
        self.content_kinds = content_kinds;
        self
    }

    pub fn block_coordinate(&self) -> Coordinate {
        Coordinate::new(
            self.block_event_kind,
            self.content.ref_node_pubkey.clone(),
            self.content.ref_block_id.clone(),
        )
    }

    pub fn to_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        require_values("relays", &self.relays)?;
        require_values("content_kinds", &self.content_kinds)?;

        let mut tags = vec![
            identifier_tag(KIND_MARKETPLACE, &self.content.ref_marketplace_id)?,
            block_height_tag(self.block_height),
            self.block_coordinate().to_tag(),
        ];
        tags.extend(value_tags(
            "p",
            &[&self.content.ref_marketplace_pubkey, &self.content.ref_node_pubkey],
        ));
        tags.extend(value_tags("r", &self.relays));
        tags.extend(
            self.content_kinds
                .iter()
                .map(|kind| vec!["k".to_string(), kind.to_string()]),
        );
        if let Some(website_url) = &self.content.website_url {
            tags.push(vec!["u".to_string(), website_url.clone()]);
        }
        Ok(tags)
    }

    pub fn to_event_template(&self, created_at: u64) -> Result<EventTemplate, BuildError> {
        template(KIND_MARKETPLACE, self.to_tags()?, &self.content, created_at)
    }
}

/// Builder for Billboard events (kind 38288).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillboardBuilder {
    pub content: BillboardContent,
    pub block_height: u64,
    /// Where the billboard displays promotions.
    pub url: String,
    pub relays: Vec<String>,
    pub content_kinds: Vec<u16>,
}

impl BillboardBuilder {
    pub fn new(content: BillboardContent, block_height: u64, url: impl Into<String>) -> Self {
        Self {
            content,
            block_height,
            url: url.into(),
            relays: Vec::new(),
            content_kinds: vec![KIND_VIDEO],
        }
    }

    pub fn add_relay(mut self, relay: impl Into<String>) -> Self {
        self.relays.push(relay.into());
        self
    }

    pub fn with_content_kinds(mut self, content_kinds: Vec<u16>) -> Self {
        self.content_kinds = content_kinds;
        self
    }

    pub fn to_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        require_values("relays", &self.relays)?;
        require_values("content_kinds", &self.content_kinds)?;
        if self.url.is_empty() {
            return Err(BuildError::MissingField("url"));
        }

        let content = &self.content;
        let mut tags = vec![
            identifier_tag(KIND_BILLBOARD, &content.ref_billboard_id)?,
            block_height_tag(self.block_height),
            marketplace_coordinate(&content.ref_marketplace_pubkey, &content.ref_marketplace_id)?
                .to_tag(),
        ];
        tags.extend(value_tags(
            "p",
            &[&content.ref_billboard_pubkey, &content.ref_marketplace_pubkey],
        ));
        tags.extend(value_tags("r", &self.relays));
        tags.extend(
            self.content_kinds
                .iter()
                .map(|kind| vec!["k".to_string(), kind.to_string()]),
        );
        tags.push(vec!["u".to_string(), self.url.clone()]);
        Ok(tags)
    }

    pub fn to_event_template(&self, created_at: u64) -> Result<EventTemplate, BuildError> {
        template(KIND_BILLBOARD, self.to_tags()?, &self.content, created_at)
    }
}

/// Builder for Promotion events (kind 38388).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionBuilder {
    pub content: PromotionContent,
    pub block_height: u64,
    /// Coordinate of the promoted content event.
    pub video: Coordinate,
    pub relays: Vec<String>,
}

impl PromotionBuilder {
    pub fn new(content: PromotionContent, block_height: u64, video: Coordinate) -> Self {
        Self {
            content,
            block_height,
            video,
            relays: Vec::new(),
        }
    }

    pub fn add_relay(mut self, relay: impl Into<String>) -> Self {
        self.relays.push(relay.into());
        self
    }

    pub fn to_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        require_values("relays", &self.relays)?;
        require_positive("bid", self.content.bid)?;
        require_positive("duration", self.content.duration)?;

        let content = &self.content;
        let mut tags = vec![
            identifier_tag(KIND_PROMOTION, &content.ref_promotion_id)?,
            block_height_tag(self.block_height),
            marketplace_coordinate(&content.ref_marketplace_pubkey, &content.ref_marketplace_id)?
                .to_tag(),
            self.video.to_tag(),
            Coordinate::attn(
                KIND_BILLBOARD,
                content.ref_billboard_pubkey.as_str(),
                &content.ref_billboard_id,
            )?
            .to_tag(),
        ];
        tags.extend(value_tags(
            "p",
            &[
                &content.ref_promotion_pubkey,
                &content.ref_marketplace_pubkey,
                &content.ref_billboard_pubkey,
            ],
        ));
        tags.extend(value_tags("r", &self.relays));
        tags.push(vec!["k".to_string(), self.video.kind.to_string()]);
        tags.push(vec!["u".to_string(), content.call_to_action_url.clone()]);
        Ok(tags)
    }

    pub fn to_event_template(&self, created_at: u64) -> Result<EventTemplate, BuildError> {
        template(KIND_PROMOTION, self.to_tags()?, &self.content, created_at)
    }
}

/// Builder for Attention events (kind 38488).
///
/// The blocked and trusted list ids are the `d` values of the viewer's own
/// NIP-51 lists; they become `30000:<ref_attention_pubkey>:<id>` coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttentionBuilder {
    pub content: AttentionContent,
    pub block_height: u64,
    pub relays: Vec<String>,
    pub content_kinds: Vec<u16>,
}

impl AttentionBuilder {
    pub fn new(content: AttentionContent, block_height: u64) -> Self {
        Self {
            content,
            block_height,
            relays: Vec::new(),
            content_kinds: vec![KIND_VIDEO],
        }
    }

    pub fn add_relay(mut self, relay: impl Into<String>) -> Self {
        self.relays.push(relay.into());
        self
    }

    pub fn with_content_kinds(mut self, content_kinds: Vec<u16>) -> Self {
        self.content_kinds = content_kinds;
        self
    }

    fn list_tag(&self, list_id: &str) -> Vec<String> {
        Coordinate::new(KIND_LIST, self.content.ref_attention_pubkey.clone(), list_id).to_tag()
    }

    pub fn to_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        require_values("relays", &self.relays)?;
        require_values("content_kinds", &self.content_kinds)?;
        let content = &self.content;
        require_positive("ask", content.ask)?;
        require_positive("min_duration", content.min_duration)?;
        if content.min_duration > content.max_duration {
            return Err(BuildError::OutOfRange {
                field: "max_duration",
                constraint: "at least min_duration",
                value: i128::from(content.max_duration),
            });
        }

        let mut tags = vec![
            identifier_tag(KIND_ATTENTION, &content.ref_attention_id)?,
            block_height_tag(self.block_height),
            marketplace_coordinate(&content.ref_marketplace_pubkey, &content.ref_marketplace_id)?
                .to_tag(),
            self.list_tag(&content.blocked_promotions_id),
            self.list_tag(&content.blocked_promoters_id),
        ];
        for list_id in [&content.trusted_marketplaces_id, &content.trusted_billboards_id]
            .into_iter()
            .flatten()
        {
            tags.push(self.list_tag(list_id));
        }
        tags.extend(value_tags(
            "p",
            &[&content.ref_attention_pubkey, &content.ref_marketplace_pubkey],
        ));
        tags.extend(value_tags("r", &self.relays));
        tags.extend(
            self.content_kinds
                .iter()
                .map(|kind| vec!["k".to_string(), kind.to_string()]),
        );
        Ok(tags)
    }

    pub fn to_event_template(&self, created_at: u64) -> Result<EventTemplate, BuildError> {
        template(KIND_ATTENTION, self.to_tags()?, &self.content, created_at)
    }
}
