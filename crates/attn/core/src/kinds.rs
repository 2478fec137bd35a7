//! ATTN kind numbers, event-type tokens, and the relay allow-list.

use crate::config::ValidatorConfig;
use std::fmt;

/// Marketplace definition.
pub const KIND_MARKETPLACE: u16 = 38188;
/// Billboard listing inside a marketplace.
pub const KIND_BILLBOARD: u16 = 38288;
/// Promotion (bid) for a piece of content.
pub const KIND_PROMOTION: u16 = 38388;
/// Attention offer (ask) from a viewer.
pub const KIND_ATTENTION: u16 = 38488;
/// Billboard confirmation of a match.
pub const KIND_BILLBOARD_CONFIRMATION: u16 = 38588;
/// Attention-provider confirmation of a match.
pub const KIND_ATTENTION_CONFIRMATION: u16 = 38688;
/// Marketplace confirmation that both sides confirmed.
pub const KIND_MARKETPLACE_CONFIRMATION: u16 = 38788;
/// Match between a promotion and an attention offer.
pub const KIND_MATCH: u16 = 38888;
/// Attention provider confirmation that payment arrived.
pub const KIND_ATTENTION_PAYMENT_CONFIRMATION: u16 = 38988;

/// Block event kind published by the City Protocol clock service.
pub const BLOCK_EVENT_KIND: u16 = 38808;
/// Block event kind used by the earlier node bridge.
pub const LEGACY_BLOCK_EVENT_KIND: u16 = 38088;

/// Lowest ATTN protocol kind.
pub const ATTN_KIND_MIN: u16 = KIND_MARKETPLACE;
/// Highest ATTN protocol kind.
pub const ATTN_KIND_MAX: u16 = KIND_ATTENTION_PAYMENT_CONFIRMATION;

/// Namespace prefix segment for ATTN identifiers.
pub const ATTN_NAMESPACE: &str = "org.attnprotocol";
/// Namespace prefix segment for City Protocol block identifiers.
pub const CITY_NAMESPACE: &str = "org.cityprotocol";
/// Event-type token of the block event.
pub const BLOCK_EVENT_TYPE: &str = "block";

/// NIP-51 categorized list kind.
pub const KIND_LIST: u16 = 30000;
/// NIP-71 addressable video content.
pub const KIND_VIDEO: u16 = 34236;

/// NIP-51 list identifier: blocked promotions.
pub const LIST_BLOCKED_PROMOTIONS: &str = "org.attnprotocol:promotion:blocked";
/// NIP-51 list identifier: blocked promoters.
pub const LIST_BLOCKED_PROMOTERS: &str = "org.attnprotocol:promoter:blocked";
/// NIP-51 list identifier: trusted billboards.
pub const LIST_TRUSTED_BILLBOARDS: &str = "org.attnprotocol:billboard:trusted";
/// NIP-51 list identifier: trusted marketplaces.
pub const LIST_TRUSTED_MARKETPLACES: &str = "org.attnprotocol:marketplace:trusted";

/// `e` tag marker for the referenced match event.
pub const MARKER_MATCH: &str = "match";
/// `e` tag marker for the referenced billboard confirmation.
pub const MARKER_BILLBOARD_CONFIRMATION: &str = "billboard_confirmation";
/// `e` tag marker for the referenced attention confirmation.
pub const MARKER_ATTENTION_CONFIRMATION: &str = "attention_confirmation";
/// `e` tag marker for the referenced marketplace confirmation.
pub const MARKER_MARKETPLACE_CONFIRMATION: &str = "marketplace_confirmation";

/// Tag names allowed on ATTN and block events.
pub const OFFICIAL_TAGS: [&str; 8] = ["d", "t", "a", "e", "p", "r", "k", "u"];

/// The nine ATTN kinds in protocol order.
pub const ATTN_KINDS: [u16; 9] = [
    KIND_MARKETPLACE,
    KIND_BILLBOARD,
    KIND_PROMOTION,
    KIND_ATTENTION,
    KIND_BILLBOARD_CONFIRMATION,
    KIND_ATTENTION_CONFIRMATION,
    KIND_MARKETPLACE_CONFIRMATION,
    KIND_MATCH,
    KIND_ATTENTION_PAYMENT_CONFIRMATION,
];

/// Standard Nostr kinds a marketplace relay accepts alongside ATTN events.
///
/// Their structure is governed by their own NIPs and is not checked here.
pub const SUPPORTING_KINDS: [u16; 22] = [
    0,     // profile metadata
    1,     // short text note
    3,     // follow list
    5,     // deletion
    6,     // repost
    7,     // reaction
    16,    // generic repost
    1111,  // comment
    1984,  // report
    1985,  // label
    9734,  // zap request
    9735,  // zap receipt
    10000, // mute list
    10002, // relay list
    10003, // bookmarks
    22242, // client authentication
    30000, // categorized people/event lists
    30003, // bookmark sets
    30023, // long-form content
    30311, // live event
    34235, // horizontal video
    34236, // vertical video
];

/// Check if a kind is one of the nine ATTN kinds.
pub fn is_attn_kind(kind: u16) -> bool {
    ATTN_KINDS.contains(&kind)
}

/// Check if a kind falls in the ATTN protocol range (38188-38988).
pub fn is_protocol_range(kind: u16) -> bool {
    (ATTN_KIND_MIN..=ATTN_KIND_MAX).contains(&kind)
}

/// Check if a kind is a supporting standard Nostr kind.
pub fn is_supporting_kind(kind: u16) -> bool {
    SUPPORTING_KINDS.contains(&kind)
}

/// Check if a tag name is one of `d,t,a,e,p,r,k,u`.
pub fn is_official_tag(name: &str) -> bool {
    OFFICIAL_TAGS.contains(&name)
}

/// Event-type token of an ATTN kind (the middle segment of its `d` tag).
pub fn event_type_for_kind(kind: u16) -> Option<&'static str> {
    AttnKind::from_protocol_kind(kind).map(AttnKind::event_type)
}

/// Kinds validated by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttnKind {
    Marketplace,
    Billboard,
    Promotion,
    Attention,
    BillboardConfirmation,
    AttentionConfirmation,
    MarketplaceConfirmation,
    Match,
    AttentionPaymentConfirmation,
    /// Externally authored block event; its number comes from [`ValidatorConfig`].
    Block,
}

impl AttnKind {
    /// Resolve one of the nine fixed ATTN kinds.
    pub fn from_protocol_kind(kind: u16) -> Option<Self> {
        match kind {
            KIND_MARKETPLACE => Some(Self::Marketplace),
            KIND_BILLBOARD => Some(Self::Billboard),
            KIND_PROMOTION => Some(Self::Promotion),
            KIND_ATTENTION => Some(Self::Attention),
            KIND_BILLBOARD_CONFIRMATION => Some(Self::BillboardConfirmation),
            KIND_ATTENTION_CONFIRMATION => Some(Self::AttentionConfirmation),
            KIND_MARKETPLACE_CONFIRMATION => Some(Self::MarketplaceConfirmation),
            KIND_MATCH => Some(Self::Match),
            KIND_ATTENTION_PAYMENT_CONFIRMATION => Some(Self::AttentionPaymentConfirmation),
            _ => None,
        }
    }

    /// Resolve any validated kind, including the configured block kind.
    pub fn from_kind(kind: u16, config: &ValidatorConfig) -> Option<Self> {
        if kind == config.block_event_kind() {
            return Some(Self::Block);
        }
        Self::from_protocol_kind(kind)
    }

    /// Numeric kind of this variant.
    pub fn number(self, config: &ValidatorConfig) -> u16 {
        match self {
            Self::Marketplace => KIND_MARKETPLACE,
            Self::Billboard => KIND_BILLBOARD,
            Self::Promotion => KIND_PROMOTION,
            Self::Attention => KIND_ATTENTION,
            Self::BillboardConfirmation => KIND_BILLBOARD_CONFIRMATION,
            Self::AttentionConfirmation => KIND_ATTENTION_CONFIRMATION,
            Self::MarketplaceConfirmation => KIND_MARKETPLACE_CONFIRMATION,
            Self::Match => KIND_MATCH,
            Self::AttentionPaymentConfirmation => KIND_ATTENTION_PAYMENT_CONFIRMATION,
            Self::Block => config.block_event_kind(),
        }
    }

    /// Event-type token used in `d` tags and coordinates.
    pub fn event_type(self) -> &'static str {
        match self {
            Self::Marketplace => "marketplace",
            Self::Billboard => "billboard",
            Self::Promotion => "promotion",
            Self::Attention => "attention",
            Self::BillboardConfirmation => "billboard-confirmation",
            Self::AttentionConfirmation => "attention-confirmation",
            Self::MarketplaceConfirmation => "marketplace-confirmation",
            Self::Match => "match",
            Self::AttentionPaymentConfirmation => "attention-payment-confirmation",
            Self::Block => BLOCK_EVENT_TYPE,
        }
    }

    /// Human-readable name used in validation messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Marketplace => "Marketplace",
            Self::Billboard => "Billboard",
            Self::Promotion => "Promotion",
            Self::Attention => "Attention",
            Self::BillboardConfirmation => "Billboard Confirmation",
            Self::AttentionConfirmation => "Attention Confirmation",
            Self::MarketplaceConfirmation => "Marketplace Confirmation",
            Self::Match => "Match",
            Self::AttentionPaymentConfirmation => "Attention Payment Confirmation",
            Self::Block => "Block",
        }
    }

    /// Identifier namespace of this kind.
    pub fn namespace(self) -> &'static str {
        match self {
            Self::Block => CITY_NAMESPACE,
            _ => ATTN_NAMESPACE,
        }
    }
}

impl fmt::Display for AttnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
