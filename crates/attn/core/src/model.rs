//! Typed view of a validated ATTN event.

use crate::config::ValidatorConfig;
use crate::content::{
    AttentionContent, AttentionPaymentConfirmationContent, BillboardContent, BlockContent,
    MarketplaceConfirmationContent, MarketplaceContent, MatchConfirmationContent, MatchContent,
    PromotionContent,
};
use crate::grammar::Coordinate;
use crate::kinds::AttnKind;
use crate::nip01::Event;
use crate::tag_parsing::tag_values;
use crate::validate::{
    Checked, ValidationError, check_attention, check_attention_confirmation,
    check_attention_payment_confirmation, check_billboard, check_billboard_confirmation,
    check_block, check_marketplace, check_marketplace_confirmation, check_match,
    check_official_tags, check_promotion,
};

/// Fields every validated ATTN event carries outside its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventHeader {
    pub id: String,
    pub pubkey: String,
    pub kind: u16,
    /// Full `d` tag value.
    pub identifier: String,
    pub block_height: u64,
    /// Parsed `a` tags, in document order.
    pub references: Vec<Coordinate>,
}

impl EventHeader {
    fn new(event: &Event, d_tag: &str, block_height: u64) -> Self {
        Self {
            id: event.id.clone(),
            pubkey: event.pubkey.clone(),
            kind: event.kind,
            identifier: d_tag.to_string(),
            block_height,
            references: tag_values(event, "a")
                .into_iter()
                .filter_map(|value| value.parse().ok())
                .collect(),
        }
    }

    /// Coordinate other events use to reference this one.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.kind, self.pubkey.clone(), self.identifier.clone())
    }

    /// First reference to an event of `kind`.
    pub fn reference(&self, kind: u16) -> Option<&Coordinate> {
        self.references.iter().find(|coordinate| coordinate.kind == kind)
    }
}

/// Header plus decoded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addressed<T> {
    pub header: EventHeader,
    pub content: T,
}

impl<T> Addressed<T> {
    fn from_checked(event: &Event, checked: Checked<'_, T>) -> Self {
        Self {
            header: EventHeader::new(event, checked.d_tag, checked.block_height),
            content: checked.content,
        }
    }
}

/// A validated ATTN or block event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttnEvent {
    Marketplace(Addressed<MarketplaceContent>),
    Billboard(Addressed<BillboardContent>),
    Promotion(Addressed<PromotionContent>),
    Attention(Addressed<AttentionContent>),
    BillboardConfirmation(Addressed<MatchConfirmationContent>),
    AttentionConfirmation(Addressed<MatchConfirmationContent>),
    MarketplaceConfirmation(Addressed<MarketplaceConfirmationContent>),
    Match(Addressed<MatchContent>),
    AttentionPaymentConfirmation(Addressed<AttentionPaymentConfirmationContent>),
    Block(Addressed<BlockContent>),
}

impl AttnEvent {
    /// Validate `event` and decode it into its typed form.
    ///
    /// Supporting Nostr kinds have no typed model here and are reported as
    /// [`ValidationError::KindRejected`].
    pub fn parse(event: &Event, config: &ValidatorConfig) -> Result<Self, ValidationError> {
        let kind = AttnKind::from_kind(event.kind, config)
            .ok_or(ValidationError::KindRejected(event.kind))?;
        check_official_tags(event)?;

        let parsed = match kind {
            AttnKind::Marketplace => {
                Self::Marketplace(Addressed::from_checked(event, check_marketplace(event, config)?))
            }
            AttnKind::Billboard => {
                Self::Billboard(Addressed::from_checked(event, check_billboard(event, config)?))
            }
            AttnKind::Promotion => {
                Self::Promotion(Addressed::from_checked(event, check_promotion(event, config)?))
            }
            AttnKind::Attention => {
                Self::Attention(Addressed::from_checked(event, check_attention(event, config)?))
            }
            AttnKind::BillboardConfirmation => Self::BillboardConfirmation(Addressed::from_checked(
                event,
                check_billboard_confirmation(event, config)?,
            )),
            AttnKind::AttentionConfirmation => Self::AttentionConfirmation(Addressed::from_checked(
                event,
                check_attention_confirmation(event, config)?,
            )),
            AttnKind::MarketplaceConfirmation => Self::MarketplaceConfirmation(
                Addressed::from_checked(event, check_marketplace_confirmation(event, config)?),
            ),
            AttnKind::Match => Self::Match(Addressed::from_checked(event, check_match(event, config)?)),
            AttnKind::AttentionPaymentConfirmation => Self::AttentionPaymentConfirmation(
                Addressed::from_checked(event, check_attention_payment_confirmation(event, config)?),
            ),
            AttnKind::Block => Self::Block(Addressed::from_checked(event, check_block(event, config)?)),
        };
        Ok(parsed)
    }

    pub fn kind(&self) -> AttnKind {
        match self {
            Self::Marketplace(_) => AttnKind::Marketplace,
            Self::Billboard(_) => AttnKind::Billboard,
            Self::Promotion(_) => AttnKind::Promotion,
            Self::Attention(_) => AttnKind::Attention,
            Self::BillboardConfirmation(_) => AttnKind::BillboardConfirmation,
            Self::AttentionConfirmation(_) => AttnKind::AttentionConfirmation,
            Self::MarketplaceConfirmation(_) => AttnKind::MarketplaceConfirmation,
            Self::Match(_) => AttnKind::Match,
            Self::AttentionPaymentConfirmation(_) => AttnKind::AttentionPaymentConfirmation,
            Self::Block(_) => AttnKind::Block,
        }
    }

    pub fn header(&self) -> &EventHeader {
        match self {
            Self::Marketplace(event) => &event.header,
            Self::Billboard(event) => &event.header,
            Self::Promotion(event) => &event.header,
            Self::Attention(event) => &event.header,
            Self::BillboardConfirmation(event) | Self::AttentionConfirmation(event) => {
                &event.header
            }
            Self::MarketplaceConfirmation(event) => &event.header,
            Self::Match(event) => &event.header,
            Self::AttentionPaymentConfirmation(event) => &event.header,
            Self::Block(event) => &event.header,
        }
    }

    pub fn block_height(&self) -> u64 {
        self.header().block_height
    }

    pub fn coordinate(&self) -> Coordinate {
        self.header().coordinate()
    }
}

impl TryFrom<&Event> for AttnEvent {
    type Error = ValidationError;

    fn try_from(event: &Event) -> Result<Self, Self::Error> {
        Self::parse(event, &ValidatorConfig::default())
    }
}
