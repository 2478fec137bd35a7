use super::{
    BuildError, block_height_tag, identifier_tag, marked_event_tag, require_positive,
    require_values, template, value_tags,
};
use crate::content::{
    AttentionPaymentConfirmationContent, MarketplaceConfirmationContent, MatchConfirmationContent,
    MatchContent,
};
use crate::grammar::Coordinate;
use crate::kinds::{
    KIND_ATTENTION, KIND_ATTENTION_CONFIRMATION, KIND_ATTENTION_PAYMENT_CONFIRMATION,
    KIND_BILLBOARD, KIND_BILLBOARD_CONFIRMATION, KIND_MARKETPLACE, KIND_MARKETPLACE_CONFIRMATION,
    KIND_MATCH, KIND_PROMOTION, MARKER_ATTENTION_CONFIRMATION, MARKER_BILLBOARD_CONFIRMATION,
    MARKER_MARKETPLACE_CONFIRMATION, MARKER_MATCH,
};
use crate::nip01::EventTemplate;

/// The four addressable events a match ties together, as `(pubkey, id)` pairs.
struct Deal<'a> {
    marketplace: (&'a str, &'a str),
    billboard: (&'a str, &'a str),
    promotion: (&'a str, &'a str),
    attention: (&'a str, &'a str),
}

impl Deal<'_> {
    fn coordinate_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        let tags = [
            (KIND_MARKETPLACE, self.marketplace),
            (KIND_BILLBOARD, self.billboard),
            (KIND_PROMOTION, self.promotion),
            (KIND_ATTENTION, self.attention),
        ]
        .into_iter()
        .map(|(kind, (pubkey, id))| {
            Coordinate::attn(kind, pubkey, id).map(|coordinate| coordinate.to_tag())
        })
        .collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }

    fn pubkey_tags(&self) -> Vec<Vec<String>> {
        value_tags(
            "p",
            &[
                self.marketplace.0,
                self.billboard.0,
                self.promotion.0,
                self.attention.0,
            ],
        )
    }

    /// Matches are published by the marketplace operator.
    fn match_tag(&self, match_id: &str) -> Result<Vec<String>, BuildError> {
        Ok(Coordinate::attn(KIND_MATCH, self.marketplace.0, match_id)?.to_tag())
    }
}

impl<'a> From<&'a MatchConfirmationContent> for Deal<'a> {
    fn from(content: &'a MatchConfirmationContent) -> Self {
        Self {
            marketplace: (&content.ref_marketplace_pubkey, &content.ref_marketplace_id),
            billboard: (&content.ref_billboard_pubkey, &content.ref_billboard_id),
            promotion: (&content.ref_promotion_pubkey, &content.ref_promotion_id),
            attention: (&content.ref_attention_pubkey, &content.ref_attention_id),
        }
    }
}

/// Event ids of the four deal events, referenced by plain `e` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealEvents {
    pub marketplace: String,
    pub billboard: String,
    pub promotion: String,
    pub attention: String,
}

impl DealEvents {
    fn to_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        let ids = [
            &self.marketplace,
            &self.billboard,
            &self.promotion,
            &self.attention,
        ];
        if ids.iter().any(|id| id.is_empty()) {
            return Err(BuildError::MissingField("deal_events"));
        }
        Ok(value_tags("e", &ids))
    }
}

fn first_relay(relays: &[String]) -> &str {
    relays.first().map_or("", String::as_str)
}

/// Builder for Match events (kind 38888).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchBuilder {
    pub content: MatchContent,
    pub block_height: u64,
    pub relays: Vec<String>,
}

impl MatchBuilder {
    pub fn new(content: MatchContent, block_height: u64) -> Self {
        Self {
            content,
            block_height,
            relays: Vec::new(),
        }
    }

    pub fn add_relay(mut self, relay: impl Into<String>) -> Self {
        self.relays.push(relay.into());
        self
    }

    pub fn to_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        require_values("relays", &self.relays)?;
        let content = &self.content;
        let deal = Deal {
            marketplace: (&content.ref_marketplace_pubkey, &content.ref_marketplace_id),
            billboard: (&content.ref_billboard_pubkey, &content.ref_billboard_id),
            promotion: (&content.ref_promotion_pubkey, &content.ref_promotion_id),
            attention: (&content.ref_attention_pubkey, &content.ref_attention_id),
        };

        let mut tags = vec![
            identifier_tag(KIND_MATCH, &content.ref_match_id)?,
            block_height_tag(self.block_height),
        ];
        tags.extend(deal.coordinate_tags()?);
        tags.extend(deal.pubkey_tags());
        tags.extend(value_tags("r", &self.relays));
        Ok(tags)
    }

    pub fn to_event_template(&self, created_at: u64) -> Result<EventTemplate, BuildError> {
        template(KIND_MATCH, self.to_tags()?, &self.content, created_at)
    }
}

/// Which side of a match is confirming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationSide {
    Billboard,
    Attention,
}

impl ConfirmationSide {
    pub fn kind(self) -> u16 {
        match self {
            Self::Billboard => KIND_BILLBOARD_CONFIRMATION,
            Self::Attention => KIND_ATTENTION_CONFIRMATION,
        }
    }
}

/// Builder for Billboard (38588) and Attention (38688) confirmations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationBuilder {
    pub side: ConfirmationSide,
    /// Bare id of the confirmation itself.
    pub id: String,
    pub content: MatchConfirmationContent,
    pub block_height: u64,
    pub deal_events: DealEvents,
    pub relays: Vec<String>,
}

impl ConfirmationBuilder {
    pub fn new(
        side: ConfirmationSide,
        id: impl Into<String>,
        content: MatchConfirmationContent,
        block_height: u64,
        deal_events: DealEvents,
    ) -> Self {
        Self {
            side,
            id: id.into(),
            content,
            block_height,
            deal_events,
            relays: Vec::new(),
        }
    }

    pub fn add_relay(mut self, relay: impl Into<String>) -> Self {
        self.relays.push(relay.into());
        self
    }

    pub fn to_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        require_values("relays", &self.relays)?;
        let deal = Deal::from(&self.content);
        let relay = first_relay(&self.relays);

        let mut tags = vec![
            identifier_tag(self.side.kind(), &self.id)?,
            block_height_tag(self.block_height),
        ];
        tags.extend(deal.coordinate_tags()?);
        tags.push(deal.match_tag(&self.content.ref_match_id)?);
        tags.push(marked_event_tag(
            &self.content.ref_match_event_id,
            relay,
            MARKER_MATCH,
        ));
        tags.extend(self.deal_events.to_tags()?);
        tags.extend(deal.pubkey_tags());
        tags.extend(value_tags("r", &self.relays));
        Ok(tags)
    }

    pub fn to_event_template(&self, created_at: u64) -> Result<EventTemplate, BuildError> {
        template(self.side.kind(), self.to_tags()?, &self.content, created_at)
    }
}

/// Builder for Marketplace confirmations (kind 38788).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceConfirmationBuilder {
    pub id: String,
    pub content: MarketplaceConfirmationContent,
    pub block_height: u64,
    pub deal_events: DealEvents,
    pub relays: Vec<String>,
}

impl MarketplaceConfirmationBuilder {
    pub fn new(
        id: impl Into<String>,
        content: MarketplaceConfirmationContent,
        block_height: u64,
        deal_events: DealEvents,
    ) -> Self {
        Self {
            id: id.into(),
            content,
            block_height,
            deal_events,
            relays: Vec::new(),
        }
    }

    pub fn add_relay(mut self, relay: impl Into<String>) -> Self {
        self.relays.push(relay.into());
        self
    }

    pub fn to_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        require_values("relays", &self.relays)?;
        let confirmation = &self.content.confirmation;
        let deal = Deal::from(confirmation);
        let relay = first_relay(&self.relays);

        let mut tags = vec![
            identifier_tag(KIND_MARKETPLACE_CONFIRMATION, &self.id)?,
            block_height_tag(self.block_height),
        ];
        tags.extend(deal.coordinate_tags()?);
        tags.push(deal.match_tag(&confirmation.ref_match_id)?);
        tags.push(marked_event_tag(
            &confirmation.ref_match_event_id,
            relay,
            MARKER_MATCH,
        ));
        tags.push(marked_event_tag(
            &self.content.ref_billboard_confirmation_event_id,
            relay,
            MARKER_BILLBOARD_CONFIRMATION,
        ));
        tags.push(marked_event_tag(
            &self.content.ref_attention_confirmation_event_id,
            relay,
            MARKER_ATTENTION_CONFIRMATION,
        ));
        tags.extend(self.deal_events.to_tags()?);
        tags.extend(deal.pubkey_tags());
        tags.extend(value_tags("r", &self.relays));
        Ok(tags)
    }

    pub fn to_event_template(&self, created_at: u64) -> Result<EventTemplate, BuildError> {
        template(
            KIND_MARKETPLACE_CONFIRMATION,
            self.to_tags()?,
            &self.content,
            created_at,
        )
    }
}

/// Builder for Attention payment confirmations (kind 38988).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmationBuilder {
    pub id: String,
    pub content: AttentionPaymentConfirmationContent,
    pub block_height: u64,
    pub relays: Vec<String>,
}

impl PaymentConfirmationBuilder {
    pub fn new(
        id: impl Into<String>,
        content: AttentionPaymentConfirmationContent,
        block_height: u64,
    ) -> Self {
        Self {
            id: id.into(),
            content,
            block_height,
            relays: Vec::new(),
        }
    }

    pub fn add_relay(mut self, relay: impl Into<String>) -> Self {
        self.relays.push(relay.into());
        self
    }

    pub fn to_tags(&self) -> Result<Vec<Vec<String>>, BuildError> {
        require_values("relays", &self.relays)?;
        require_positive("sats_received", self.content.sats_received)?;
        let confirmation = &self.content.confirmation;
        let deal = Deal::from(confirmation);

        let mut tags = vec![
            identifier_tag(KIND_ATTENTION_PAYMENT_CONFIRMATION, &self.id)?,
            block_height_tag(self.block_height),
        ];
        tags.extend(deal.coordinate_tags()?);
        tags.push(deal.match_tag(&confirmation.ref_match_id)?);
        tags.push(marked_event_tag(
            &self.content.ref_marketplace_confirmation_event_id,
            first_relay(&self.relays),
            MARKER_MARKETPLACE_CONFIRMATION,
        ));
        tags.extend(deal.pubkey_tags());
        tags.extend(value_tags("r", &self.relays));
        Ok(tags)
    }

    pub fn to_event_template(&self, created_at: u64) -> Result<EventTemplate, BuildError> {
        template(
            KIND_ATTENTION_PAYMENT_CONFIRMATION,
            self.to_tags()?,
            &self.content,
            created_at,
        )
    }
}
