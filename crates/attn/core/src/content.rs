//! JSON `content` schemas for each ATTN kind.
//!
//! Each schema lists its required fields with their JSON type so a validator
//! can report a missing field separately from a field of the wrong type before
//! decoding into the typed struct. Amounts and durations are signed so that a
//! negative value is a range violation, not a decode failure.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON type expected for a required content field.
///
/// `Integer` means a JSON integer that fits in `i64`. Integral floats such as
/// `5000.0` are a type mismatch; integers above `i64::MAX` are reported as a
/// range violation by the validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    String,
    Array,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Integer => "an integer",
            FieldType::String => "a string",
            FieldType::Array => "an array",
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::Integer => value.as_i64().is_some(),
            FieldType::String => value.is_string(),
            FieldType::Array => value.is_array(),
        }
    }
}

/// A per-kind content payload.
pub trait ContentSchema: Serialize + DeserializeOwned {
    /// Required fields in the order they are checked.
    const REQUIRED_FIELDS: &'static [(&'static str, FieldType)];
}

use FieldType::{Array, Integer, String as Str};

/// Content of a Marketplace event (kind 38188).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceContent {
    pub name: String,
    pub description: String,
    pub admin_pubkey: String,
    pub min_duration: i64,
    pub max_duration: i64,
    pub match_fee_sats: i64,
    pub confirmation_fee_sats: i64,
    pub ref_marketplace_pubkey: String,
    pub ref_marketplace_id: String,
    pub ref_node_pubkey: String,
    pub ref_block_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

impl ContentSchema for MarketplaceContent {
    const REQUIRED_FIELDS: &'static [(&'static str, FieldType)] = &[
        ("name", Str),
        ("description", Str),
        ("admin_pubkey", Str),
        ("min_duration", Integer),
        ("max_duration", Integer),
        ("match_fee_sats", Integer),
        ("confirmation_fee_sats", Integer),
        ("ref_marketplace_pubkey", Str),
        ("ref_marketplace_id", Str),
        ("ref_node_pubkey", Str),
        ("ref_block_id", Str),
    ];
}

/// Content of a Billboard event (kind 38288).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillboardContent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub confirmation_fee_sats: i64,
    pub ref_billboard_pubkey: String,
    pub ref_billboard_id: String,
    pub ref_marketplace_pubkey: String,
    pub ref_marketplace_id: String,
}

impl ContentSchema for BillboardContent {
    const REQUIRED_FIELDS: &'static [(&'static str, FieldType)] = &[
        ("name", Str),
        ("confirmation_fee_sats", Integer),
        ("ref_billboard_pubkey", Str),
        ("ref_billboard_id", Str),
        ("ref_marketplace_pubkey", Str),
        ("ref_marketplace_id", Str),
    ];
}

/// Content of a Promotion event (kind 38388).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionContent {
    pub duration: i64,
    pub bid: i64,
    pub event_id: String,
    pub call_to_action: String,
    pub call_to_action_url: String,
    pub escrow_id_list: Vec<Value>,
    pub ref_promotion_pubkey: String,
    pub ref_promotion_id: String,
    pub ref_marketplace_pubkey: String,
    pub ref_marketplace_id: String,
    pub ref_billboard_pubkey: String,
    pub ref_billboard_id: String,
}

impl PromotionContent {
    /// Escrow references that are strings; other entries are ignored.
    pub fn escrow_ids(&self) -> Vec<&str> {
        self.escrow_id_list.iter().filter_map(Value::as_str).collect()
    }
}

impl ContentSchema for PromotionContent {
    const REQUIRED_FIELDS: &'static [(&'static str, FieldType)] = &[
        ("duration", Integer),
        ("bid", Integer),
        ("event_id", Str),
        ("call_to_action", Str),
        ("call_to_action_url", Str),
        ("escrow_id_list", Array),
        ("ref_promotion_pubkey", Str),
        ("ref_promotion_id", Str),
        ("ref_marketplace_pubkey", Str),
        ("ref_marketplace_id", Str),
        ("ref_billboard_pubkey", Str),
        ("ref_billboard_id", Str),
    ];
}

/// Content of an Attention event (kind 38488).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttentionContent {
    pub ask: i64,
    pub min_duration: i64,
    pub max_duration: i64,
    pub ref_attention_pubkey: String,
    pub ref_attention_id: String,
    pub ref_marketplace_pubkey: String,
    pub ref_marketplace_id: String,
    pub blocked_promotions_id: String,
    pub blocked_promoters_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_marketplaces_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_billboards_id: Option<String>,
}

impl ContentSchema for AttentionContent {
    const REQUIRED_FIELDS: &'static [(&'static str, FieldType)] = &[
        ("ask", Integer),
        ("min_duration", Integer),
        ("max_duration", Integer),
        ("ref_attention_pubkey", Str),
        ("ref_attention_id", Str),
        ("ref_marketplace_pubkey", Str),
        ("ref_marketplace_id", Str),
        ("blocked_promotions_id", Str),
        ("blocked_promoters_id", Str),
    ];
}

/// Content of a Match event (kind 38888).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchContent {
    pub ref_match_id: String,
    pub ref_promotion_id: String,
    pub ref_attention_id: String,
    pub ref_billboard_id: String,
    pub ref_marketplace_id: String,
    pub ref_marketplace_pubkey: String,
    pub ref_promotion_pubkey: String,
    pub ref_attention_pubkey: String,
    pub ref_billboard_pubkey: String,
}

impl ContentSchema for MatchContent {
    const REQUIRED_FIELDS: &'static [(&'static str, FieldType)] = &[
        ("ref_match_id", Str),
        ("ref_promotion_id", Str),
        ("ref_attention_id", Str),
        ("ref_billboard_id", Str),
        ("ref_marketplace_id", Str),
        ("ref_marketplace_pubkey", Str),
        ("ref_promotion_pubkey", Str),
        ("ref_attention_pubkey", Str),
        ("ref_billboard_pubkey", Str),
    ];
}

const MATCH_CONFIRMATION_FIELDS: [(&str, FieldType); 10] = [
    ("ref_match_event_id", Str),
    ("ref_match_id", Str),
    ("ref_marketplace_pubkey", Str),
    ("ref_billboard_pubkey", Str),
    ("ref_promotion_pubkey", Str),
    ("ref_attention_pubkey", Str),
    ("ref_marketplace_id", Str),
    ("ref_billboard_id", Str),
    ("ref_promotion_id", Str),
    ("ref_attention_id", Str),
];

/// Content shared by Billboard (38588) and Attention (38688) confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfirmationContent {
    pub ref_match_event_id: String,
    pub ref_match_id: String,
    pub ref_marketplace_pubkey: String,
    pub ref_billboard_pubkey: String,
    pub ref_promotion_pubkey: String,
    pub ref_attention_pubkey: String,
    pub ref_marketplace_id: String,
    pub ref_billboard_id: String,
    pub ref_promotion_id: String,
    pub ref_attention_id: String,
}

impl ContentSchema for MatchConfirmationContent {
    const REQUIRED_FIELDS: &'static [(&'static str, FieldType)] = &MATCH_CONFIRMATION_FIELDS;
}

/// Content of a Marketplace confirmation (kind 38788).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceConfirmationContent {
    #[serde(flatten)]
    pub confirmation: MatchConfirmationContent,
    pub ref_billboard_confirmation_event_id: String,
    pub ref_attention_confirmation_event_id: String,
}

impl ContentSchema for MarketplaceConfirmationContent {
    const REQUIRED_FIELDS: &'static [(&'static str, FieldType)] = &[
        MATCH_CONFIRMATION_FIELDS[0],
        MATCH_CONFIRMATION_FIELDS[1],
        MATCH_CONFIRMATION_FIELDS[2],
        MATCH_CONFIRMATION_FIELDS[3],
        MATCH_CONFIRMATION_FIELDS[4],
        MATCH_CONFIRMATION_FIELDS[5],
        MATCH_CONFIRMATION_FIELDS[6],
        MATCH_CONFIRMATION_FIELDS[7],
        MATCH_CONFIRMATION_FIELDS[8],
        MATCH_CONFIRMATION_FIELDS[9],
        ("ref_billboard_confirmation_event_id", Str),
        ("ref_attention_confirmation_event_id", Str),
    ];
}

/// Content of an Attention payment confirmation (kind 38988).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttentionPaymentConfirmationContent {
    pub sats_received: i64,
    #[serde(flatten)]
    pub confirmation: MatchConfirmationContent,
    pub ref_marketplace_confirmation_event_id: String,
    /// Settlement reference (invoice, preimage, or escrow release id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

impl ContentSchema for AttentionPaymentConfirmationContent {
    const REQUIRED_FIELDS: &'static [(&'static str, FieldType)] = &[
        ("sats_received", Integer),
        MATCH_CONFIRMATION_FIELDS[0],
        MATCH_CONFIRMATION_FIELDS[1],
        ("ref_marketplace_confirmation_event_id", Str),
        MATCH_CONFIRMATION_FIELDS[2],
        MATCH_CONFIRMATION_FIELDS[3],
        MATCH_CONFIRMATION_FIELDS[4],
        MATCH_CONFIRMATION_FIELDS[5],
        MATCH_CONFIRMATION_FIELDS[6],
        MATCH_CONFIRMATION_FIELDS[7],
        MATCH_CONFIRMATION_FIELDS[8],
        MATCH_CONFIRMATION_FIELDS[9],
    ];
}

/// Content of the externally authored block event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContent {
    pub height: i64,
    pub hash: String,
}

impl ContentSchema for BlockContent {
    const REQUIRED_FIELDS: &'static [(&'static str, FieldType)] =
        &[("height", Integer), ("hash", Str)];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_type_matches() {
        assert!(FieldType::Integer.matches(&json!(5)));
        assert!(FieldType::Integer.matches(&json!(-5)));
        assert!(!FieldType::Integer.matches(&json!(5.5)));
        assert!(!FieldType::Integer.matches(&json!("5")));
        assert!(FieldType::Array.matches(&json!(["tx1"])));
        assert!(!FieldType::Array.matches(&json!({"tx": 1})));
        assert!(FieldType::String.matches(&json!("")));
    }

    #[test]
    fn test_flattened_confirmation_round_trip() {
        let value = json!({
            "ref_match_event_id": "match-event",
            "ref_match_id": "match-1",
            "ref_marketplace_pubkey": "mk",
            "ref_billboard_pubkey": "bk",
            "ref_promotion_pubkey": "pk",
            "ref_attention_pubkey": "ak",
            "ref_marketplace_id": "m",
            "ref_billboard_id": "b",
            "ref_promotion_id": "p",
            "ref_attention_id": "a",
            "ref_billboard_confirmation_event_id": "bc",
            "ref_attention_confirmation_event_id": "ac"
        });
        let content: MarketplaceConfirmationContent =
            serde_json::from_value(value.clone()).unwrap();
        assert_eq!(content.confirmation.ref_match_id, "match-1");
        assert_eq!(serde_json::to_value(&content).unwrap(), value);
    }

    #[test]
    fn test_required_field_tables_have_no_duplicates() {
        fn assert_unique(fields: &[(&str, FieldType)]) {
            let mut names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), fields.len());
        }
        assert_unique(MarketplaceContent::REQUIRED_FIELDS);
        assert_unique(PromotionContent::REQUIRED_FIELDS);
        assert_unique(MarketplaceConfirmationContent::REQUIRED_FIELDS);
        assert_unique(AttentionPaymentConfirmationContent::REQUIRED_FIELDS);
    }
}
