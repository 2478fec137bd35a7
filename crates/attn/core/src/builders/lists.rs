//! NIP-51 categorized lists (kind 30000) referenced by Attention events.

use super::{BuildError, value_tags};
use crate::grammar::Coordinate;
use crate::kinds::{
    KIND_LIST, LIST_BLOCKED_PROMOTERS, LIST_BLOCKED_PROMOTIONS, LIST_TRUSTED_BILLBOARDS,
    LIST_TRUSTED_MARKETPLACES,
};
use crate::nip01::EventTemplate;
use std::fmt;
use std::str::FromStr;

/// The four ATTN list identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListType {
    BlockedPromotions,
    BlockedPromoters,
    TrustedBillboards,
    TrustedMarketplaces,
}

impl ListType {
    pub const ALL: [Self; 4] = [
        Self::BlockedPromotions,
        Self::BlockedPromoters,
        Self::TrustedBillboards,
        Self::TrustedMarketplaces,
    ];

    /// The list's `d` value.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::BlockedPromotions => LIST_BLOCKED_PROMOTIONS,
            Self::BlockedPromoters => LIST_BLOCKED_PROMOTERS,
            Self::TrustedBillboards => LIST_TRUSTED_BILLBOARDS,
            Self::TrustedMarketplaces => LIST_TRUSTED_MARKETPLACES,
        }
    }

    /// Blocked lists hold event or pubkey references to exclude; trusted lists
    /// narrow matching to their entries.
    pub fn is_blocklist(self) -> bool {
        matches!(self, Self::BlockedPromotions | Self::BlockedPromoters)
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for ListType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|list_type| list_type.identifier() == s)
            .ok_or_else(|| BuildError::UnknownList(s.to_string()))
    }
}

/// Coordinate of `pubkey`'s list of `list_type`.
pub fn list_coordinate(pubkey: &str, list_type: ListType) -> Coordinate {
    Coordinate::new(KIND_LIST, pubkey, list_type.identifier())
}

/// Builder for a kind 30000 list event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBuilder {
    pub list_type: ListType,
    pub pubkeys: Vec<String>,
    pub events: Vec<String>,
    pub coordinates: Vec<Coordinate>,
}

impl ListBuilder {
    pub fn new(list_type: ListType) -> Self {
        Self {
            list_type,
            pubkeys: Vec::new(),
            events: Vec::new(),
            coordinates: Vec::new(),
        }
    }

    pub fn add_pubkey(mut self, pubkey: impl Into<String>) -> Self {
        self.pubkeys.push(pubkey.into());
        self
    }

    pub fn add_event(mut self, event_id: impl Into<String>) -> Self {
        self.events.push(event_id.into());
        self
    }

    pub fn add_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinates.push(coordinate);
        self
    }

    pub fn to_tags(&self) -> Vec<Vec<String>> {
        let mut tags = vec![vec!["d".to_string(), self.list_type.identifier().to_string()]];
        tags.extend(value_tags("p", &self.pubkeys));
        tags.extend(value_tags("e", &self.events));
        tags.extend(self.coordinates.iter().map(Coordinate::to_tag));
        tags
    }

    /// List entries are public; `content` stays empty.
    pub fn to_event_template(&self, created_at: u64) -> EventTemplate {
        EventTemplate {
            created_at,
            kind: KIND_LIST,
            tags: self.to_tags(),
            content: String::new(),
        }
    }
}
