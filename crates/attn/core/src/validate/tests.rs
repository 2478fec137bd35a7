use super::*;
use crate::kinds::{
    BLOCK_EVENT_KIND, KIND_ATTENTION, KIND_ATTENTION_CONFIRMATION,
    KIND_ATTENTION_PAYMENT_CONFIRMATION, KIND_BILLBOARD, KIND_BILLBOARD_CONFIRMATION,
    KIND_MARKETPLACE, KIND_MARKETPLACE_CONFIRMATION, KIND_MATCH, KIND_PROMOTION,
    LEGACY_BLOCK_EVENT_KIND, SUPPORTING_KINDS,
};
use quickcheck::quickcheck;
use serde_json::json;

const PK: &str = "2f4d4b5bc03e2d8a5b7e7c4f1e7a6f3b9a9d3c8e2b1f0a4d6c7e8f9a0b1c2d3e";
const NODE_PK: &str = "0ae1c5ec0b3a3e1d7f5b7a9c2d4e6f8091a2b3c4d5e6f708192a3b4c5d6e7f80";
const BLOCK_HASH: &str = "00000000000000000001a2b3c4d5e6f7";

fn tag(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| (*part).to_string()).collect()
}

fn create_test_event(kind: u16, tags: Vec<Vec<String>>, content: &serde_json::Value) -> Event {
    Event {
        id: "test_id".to_string(),
        pubkey: PK.to_string(),
        created_at: 1_702_548_701,
        kind,
        tags,
        content: content.to_string(),
        sig: "test_sig".to_string(),
    }
}

fn coordinate(kind: u16, identifier: &str) -> Vec<String> {
    tag(&["a", &format!("{kind}:{PK}:{identifier}")])
}

fn marketplace_coordinate() -> Vec<String> {
    coordinate(KIND_MARKETPLACE, "org.attnprotocol:marketplace:test-marketplace")
}

fn deal_coordinates() -> Vec<Vec<String>> {
    vec![
        marketplace_coordinate(),
        coordinate(KIND_BILLBOARD, "org.attnprotocol:billboard:test-billboard"),
        coordinate(KIND_PROMOTION, "org.attnprotocol:promotion:test-promotion"),
        coordinate(KIND_ATTENTION, "org.attnprotocol:attention:test-attention"),
    ]
}

fn pubkeys(count: usize) -> Vec<Vec<String>> {
    (0..count).map(|_| tag(&["p", PK])).collect()
}

fn without_tag(mut event: Event, name: &str) -> Event {
    event.tags.retain(|tag| tag.first().map(String::as_str) != Some(name));
    event
}

fn without_tag_value(mut event: Event, name: &str, prefix: &str) -> Event {
    event.tags.retain(|tag| {
        !(tag.first().map(String::as_str) == Some(name)
            && tag.get(1).is_some_and(|value| value.starts_with(prefix)))
    });
    event
}

fn with_content(mut event: Event, content: serde_json::Value) -> Event {
    event.content = content.to_string();
    event
}

fn content_of(event: &Event) -> serde_json::Value {
    serde_json::from_str(&event.content).unwrap()
}

fn marketplace_event() -> Event {
    let mut tags = vec![
        tag(&["d", "org.attnprotocol:marketplace:test-marketplace"]),
        tag(&["t", "870500"]),
        coordinate(
            BLOCK_EVENT_KIND,
            &format!("org.cityprotocol:block:870500:{BLOCK_HASH}"),
        ),
    ];
    tags.extend(pubkeys(1));
    tags.push(tag(&["r", "wss://relay.example.com"]));
    tags.push(tag(&["k", "34236"]));
    create_test_event(
        KIND_MARKETPLACE,
        tags,
        &json!({
            "name": "Test Marketplace",
            "description": "Promotions for short videos",
            "admin_pubkey": PK,
            "min_duration": 15000,
            "max_duration": 60000,
            "match_fee_sats": 10,
            "confirmation_fee_sats": 5,
            "ref_marketplace_pubkey": PK,
            "ref_marketplace_id": "test-marketplace",
            "ref_node_pubkey": NODE_PK,
            "ref_block_id": format!("org.cityprotocol:block:870500:{BLOCK_HASH}"),
        }),
    )
}

fn billboard_event() -> Event {
    let mut tags = vec![
        tag(&["d", "org.attnprotocol:billboard:test-billboard"]),
        tag(&["t", "870500"]),
        marketplace_coordinate(),
    ];
    tags.extend(pubkeys(2));
    tags.push(tag(&["r", "wss://relay.example.com"]));
    tags.push(tag(&["k", "34236"]));
    tags.push(tag(&["u", "https://billboard.example.com"]));
    create_test_event(
        KIND_BILLBOARD,
        tags,
        &json!({
            "name": "Test Billboard",
            "confirmation_fee_sats": 0,
            "ref_billboard_pubkey": PK,
            "ref_billboard_id": "test-billboard",
            "ref_marketplace_pubkey": PK,
            "ref_marketplace_id": "test-marketplace",
        }),
    )
}

fn promotion_event() -> Event {
    let mut tags = vec![
        tag(&["d", "org.attnprotocol:promotion:test-promotion"]),
        tag(&["t", "870500"]),
        marketplace_coordinate(),
        coordinate(34236, "test-video"),
        coordinate(KIND_BILLBOARD, "org.attnprotocol:billboard:test-billboard"),
    ];
    tags.extend(pubkeys(3));
    tags.push(tag(&["r", "wss://relay.example.com"]));
    tags.push(tag(&["k", "34236"]));
    tags.push(tag(&["u", "https://example.com/watch"]));
    create_test_event(
        KIND_PROMOTION,
        tags,
        &json!({
            "duration": 30000,
            "bid": 5000,
            "event_id": "test-video-id",
            "call_to_action": "Watch Now",
            "call_to_action_url": "https://example.com/watch",
            "escrow_id_list": ["tx1"],
            "ref_promotion_pubkey": PK,
            "ref_promotion_id": "test-promotion",
            "ref_marketplace_pubkey": PK,
            "ref_marketplace_id": "test-marketplace",
            "ref_billboard_pubkey": PK,
            "ref_billboard_id": "test-billboard",
        }),
    )
}

fn attention_event() -> Event {
    let mut tags = vec![
        tag(&["d", "org.attnprotocol:attention:test-attention"]),
        tag(&["t", "870500"]),
        marketplace_coordinate(),
        coordinate(30000, "org.attnprotocol:promotion:blocked"),
        coordinate(30000, "org.attnprotocol:promoter:blocked"),
    ];
    tags.extend(pubkeys(2));
    tags.push(tag(&["r", "wss://relay.example.com"]));
    tags.push(tag(&["k", "34236"]));
    create_test_event(
        KIND_ATTENTION,
        tags,
        &json!({
            "ask": 3000,
            "min_duration": 15000,
            "max_duration": 60000,
            "ref_attention_pubkey": PK,
            "ref_attention_id": "test-attention",
            "ref_marketplace_pubkey": PK,
            "ref_marketplace_id": "test-marketplace",
            "blocked_promotions_id": "org.attnprotocol:promotion:blocked",
            "blocked_promoters_id": "org.attnprotocol:promoter:blocked",
        }),
    )
}

fn match_event() -> Event {
    let mut tags = vec![
        tag(&["d", "org.attnprotocol:match:test-match"]),
        tag(&["t", "870501"]),
    ];
    tags.extend(deal_coordinates());
    tags.extend(pubkeys(4));
    tags.push(tag(&["r", "wss://relay.example.com"]));
    create_test_event(
        KIND_MATCH,
        tags,
        &json!({
            "ref_match_id": "test-match",
            "ref_promotion_id": "test-promotion",
            "ref_attention_id": "test-attention",
            "ref_billboard_id": "test-billboard",
            "ref_marketplace_id": "test-marketplace",
            "ref_marketplace_pubkey": PK,
            "ref_promotion_pubkey": PK,
            "ref_attention_pubkey": PK,
            "ref_billboard_pubkey": PK,
        }),
    )
}

fn confirmation_content() -> serde_json::Value {
    json!({
        "ref_match_event_id": "match-event-id",
        "ref_match_id": "test-match",
        "ref_marketplace_pubkey": PK,
        "ref_billboard_pubkey": PK,
        "ref_promotion_pubkey": PK,
        "ref_attention_pubkey": PK,
        "ref_marketplace_id": "test-marketplace",
        "ref_billboard_id": "test-billboard",
        "ref_promotion_id": "test-promotion",
        "ref_attention_id": "test-attention",
    })
}

fn confirmation_tags(identifier: &str, references: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut tags = vec![tag(&["d", identifier]), tag(&["t", "870502"])];
    tags.extend(deal_coordinates());
    tags.push(coordinate(KIND_MATCH, "org.attnprotocol:match:test-match"));
    tags.extend(references);
    tags.extend(pubkeys(4));
    tags.push(tag(&["r", "wss://relay.example.com"]));
    tags
}

fn deal_references() -> Vec<Vec<String>> {
    vec![
        tag(&["e", "match-event-id", "wss://relay.example.com", "match"]),
        tag(&["e", "marketplace-event-id"]),
        tag(&["e", "billboard-event-id"]),
        tag(&["e", "promotion-event-id"]),
        tag(&["e", "attention-event-id"]),
    ]
}

fn billboard_confirmation_event() -> Event {
    create_test_event(
        KIND_BILLBOARD_CONFIRMATION,
        confirmation_tags(
            "org.attnprotocol:billboard-confirmation:test-confirmation",
            deal_references(),
        ),
        &confirmation_content(),
    )
}

fn attention_confirmation_event() -> Event {
    create_test_event(
        KIND_ATTENTION_CONFIRMATION,
        confirmation_tags(
            "org.attnprotocol:attention-confirmation:test-confirmation",
            deal_references(),
        ),
        &confirmation_content(),
    )
}

fn marketplace_confirmation_event() -> Event {
    let mut references = deal_references();
    references.push(tag(&[
        "e",
        "billboard-confirmation-id",
        "wss://relay.example.com",
        "billboard_confirmation",
    ]));
    references.push(tag(&[
        "e",
        "attention-confirmation-id",
        "wss://relay.example.com",
        "attention_confirmation",
    ]));
    let mut content = confirmation_content();
    content["ref_billboard_confirmation_event_id"] = json!("billboard-confirmation-id");
    content["ref_attention_confirmation_event_id"] = json!("attention-confirmation-id");
    create_test_event(
        KIND_MARKETPLACE_CONFIRMATION,
        confirmation_tags(
            "org.attnprotocol:marketplace-confirmation:test-confirmation",
            references,
        ),
        &content,
    )
}

fn attention_payment_confirmation_event() -> Event {
    let references = vec![tag(&[
        "e",
        "marketplace-confirmation-id",
        "wss://relay.example.com",
        "marketplace_confirmation",
    ])];
    let mut content = confirmation_content();
    content["sats_received"] = json!(3000);
    content["ref_marketplace_confirmation_event_id"] = json!("marketplace-confirmation-id");
    create_test_event(
        KIND_ATTENTION_PAYMENT_CONFIRMATION,
        confirmation_tags(
            "org.attnprotocol:attention-payment-confirmation:test-payment",
            references,
        ),
        &content,
    )
}

fn block_event(kind: u16) -> Event {
    let identifier = format!("org.cityprotocol:block:870500:{BLOCK_HASH}");
    create_test_event(
        kind,
        vec![tag(&["d", &identifier]), tag(&["t", "870500"])],
        &json!({ "height": 870500, "hash": BLOCK_HASH }),
    )
}

fn all_valid_events() -> Vec<Event> {
    vec![
        marketplace_event(),
        billboard_event(),
        promotion_event(),
        attention_event(),
        billboard_confirmation_event(),
        attention_confirmation_event(),
        marketplace_confirmation_event(),
        match_event(),
        attention_payment_confirmation_event(),
        block_event(BLOCK_EVENT_KIND),
    ]
}

#[test]
fn test_every_kind_accepts_a_complete_event() {
    for event in all_valid_events() {
        let result = validate_event(&event);
        assert!(result.valid, "kind {}: {}", event.kind, result.message);
    }
}

#[test]
fn test_success_message_names_the_kind() {
    assert_eq!(
        validate_event(&promotion_event()).message,
        "Valid Promotion event"
    );
    assert_eq!(
        validate_event(&billboard_confirmation_event()).message,
        "Valid Billboard Confirmation event"
    );
}

#[test]
fn test_per_kind_validators_match_dispatch() {
    let config = ValidatorConfig::default();
    assert!(validate_marketplace(&marketplace_event(), &config).valid);
    assert!(validate_billboard(&billboard_event(), &config).valid);
    assert!(validate_promotion(&promotion_event(), &config).valid);
    assert!(validate_attention(&attention_event(), &config).valid);
    assert!(validate_match(&match_event(), &config).valid);
    assert!(validate_billboard_confirmation(&billboard_confirmation_event(), &config).valid);
    assert!(validate_attention_confirmation(&attention_confirmation_event(), &config).valid);
    assert!(validate_marketplace_confirmation(&marketplace_confirmation_event(), &config).valid);
    assert!(
        validate_attention_payment_confirmation(&attention_payment_confirmation_event(), &config)
            .valid
    );
    assert!(validate_block(&block_event(BLOCK_EVENT_KIND), &config).valid);

    // A per-kind validator checks structure, not `event.kind`.
    assert!(!validate_billboard(&promotion_event(), &config).valid);
}

#[test]
fn test_promotion_missing_block_height() {
    let result = validate_event(&without_tag(promotion_event(), "t"));
    assert!(!result.valid);
    assert!(result.message.contains("Missing t tag (block height)"));
}

#[test]
fn test_promotion_non_numeric_block_height() {
    let mut event = promotion_event();
    for tag in &mut event.tags {
        if tag[0] == "t" {
            tag[1] = "abc".to_string();
        }
    }
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.contains("not a non-negative base-10 integer"));
}

fn with_block_height(mut event: Event, height: &str) -> Event {
    for tag in &mut event.tags {
        if tag[0] == "t" {
            tag[1] = height.to_string();
        }
    }
    event
}

#[test]
fn test_block_height_must_be_plain_digits() {
    for height in ["+870500", "-1", " 870500", "870500 ", "8.705e5"] {
        let result = validate_event(&with_block_height(promotion_event(), height));
        assert!(!result.valid, "{height} accepted");
        assert_eq!(
            result.message,
            format!("Block height in t tag is not a non-negative base-10 integer: `{height}`")
        );
    }
    assert!(validate_event(&with_block_height(promotion_event(), "0")).valid);
}

#[test]
fn test_valueless_tag_does_not_hide_later_value() {
    let mut event = promotion_event();
    event.tags.insert(0, tag(&["t"]));
    event.tags.insert(0, tag(&["d"]));
    assert!(validate_event(&event).valid);
}

#[test]
fn test_integer_above_i64_is_a_range_error() {
    let mut content = content_of(&promotion_event());
    content["bid"] = json!(u64::MAX);
    let result = validate_event(&with_content(promotion_event(), content.clone()));
    assert!(!result.valid);
    assert!(result.message.contains("bid"));
    assert!(result.message.contains(&i64::MAX.to_string()));

    content["bid"] = json!(5000.0);
    let result = validate_event(&with_content(promotion_event(), content));
    assert_eq!(result.message, "Content field bid must be an integer");
}

#[test]
fn test_promotion_missing_marketplace_coordinate() {
    let event = without_tag_value(promotion_event(), "a", "38188:");
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.contains("Missing marketplace coordinate"));
}

#[test]
fn test_promotion_invalid_json() {
    let mut event = promotion_event();
    event.content = "not json".to_string();
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.contains("Invalid JSON"));
}

#[test]
fn test_promotion_bid_boundary() {
    let mut content = content_of(&promotion_event());
    content["bid"] = json!(0);
    let result = validate_event(&with_content(promotion_event(), content.clone()));
    assert!(!result.valid);
    assert!(result.message.contains("bid"));

    content["bid"] = json!(1);
    assert!(validate_event(&with_content(promotion_event(), content)).valid);
}

#[test]
fn test_promotion_escrow_list_must_be_array() {
    let mut content = content_of(&promotion_event());
    content["escrow_id_list"] = json!({ "tx1": true });
    let result = validate_event(&with_content(promotion_event(), content));
    assert!(!result.valid);
    assert_eq!(
        result.message,
        "Content field escrow_id_list must be an array"
    );
}

#[test]
fn test_promotion_requires_exactly_one_content_kind() {
    let mut event = promotion_event();
    event.tags.push(tag(&["k", "34235"]));
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.contains("exactly 1 k tag"));
}

#[test]
fn test_missing_and_mistyped_fields_are_distinct() {
    let mut content = content_of(&promotion_event());
    content.as_object_mut().unwrap().remove("duration");
    let missing = validate_event(&with_content(promotion_event(), content));
    assert_eq!(missing.message, "Missing required content field: duration");

    let mut content = content_of(&promotion_event());
    content["duration"] = json!("30000");
    let mistyped = validate_event(&with_content(promotion_event(), content));
    assert_eq!(mistyped.message, "Content field duration must be an integer");
}

#[test]
fn test_content_must_be_object() {
    let result = validate_event(&with_content(promotion_event(), json!(["bid", 5000])));
    assert!(!result.valid);
    assert_eq!(result.message, "Content must be a JSON object");
}

#[test]
fn test_attention_duration_boundaries() {
    assert!(validate_event(&attention_event()).valid);

    let mut content = content_of(&attention_event());
    content["max_duration"] = json!(10000);
    let result = validate_event(&with_content(attention_event(), content));
    assert!(!result.valid);
    assert!(result.message.contains("max_duration"));

    let mut content = content_of(&attention_event());
    content["max_duration"] = json!(15000);
    assert!(validate_event(&with_content(attention_event(), content)).valid);
}

#[test]
fn test_attention_requires_blocked_lists() {
    let event = without_tag_value(attention_event(), "a", "30000:");
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.contains("blocked promotions"));
}

#[test]
fn test_attention_trusted_list_requires_content_reference() {
    let mut event = attention_event();
    event
        .tags
        .push(coordinate(30000, "org.attnprotocol:billboard:trusted"));
    let result = validate_event(&event);
    assert_eq!(
        result.message,
        "Missing required content field: trusted_billboards_id"
    );

    let mut content = content_of(&event);
    content["trusted_billboards_id"] = json!("org.attnprotocol:billboard:trusted");
    assert!(validate_event(&with_content(event, content)).valid);
}

#[test]
fn test_billboard_rejects_negative_fee() {
    let mut content = content_of(&billboard_event());
    content["confirmation_fee_sats"] = json!(-1);
    let result = validate_event(&with_content(billboard_event(), content));
    assert!(!result.valid);
    assert!(result.message.contains("must not be negative"));
}

#[test]
fn test_marketplace_requires_block_coordinate() {
    let event = without_tag_value(marketplace_event(), "a", "38808:");
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.contains("Missing block coordinate"));
}

#[test]
fn test_marketplace_description_is_required() {
    let mut content = content_of(&marketplace_event());
    content.as_object_mut().unwrap().remove("description");
    let result = validate_event(&with_content(marketplace_event(), content));
    assert_eq!(result.message, "Missing required content field: description");
}

#[test]
fn test_wrong_identifier_event_type() {
    let mut event = billboard_event();
    event.tags[0] = tag(&["d", "org.attnprotocol:promotion:test-billboard"]);
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.starts_with("Invalid d tag identifier"));
}

#[test]
fn test_coordinate_with_wrong_namespace_is_rejected() {
    let mut event = without_tag_value(billboard_event(), "a", "38188:");
    event
        .tags
        .push(coordinate(KIND_MARKETPLACE, "com.example:marketplace:test"));
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.starts_with("Invalid marketplace coordinate"));
}

#[test]
fn test_unofficial_tag_is_named() {
    for event in all_valid_events() {
        let mut event = event;
        event.tags.push(tag(&["client", "attn-web"]));
        let result = validate_event(&event);
        assert!(!result.valid);
        assert!(result.message.contains("`client`"), "{}", result.message);
    }
}

#[test]
fn test_unknown_kind_is_rejected() {
    let event = create_test_event(38999, vec![], &json!({}));
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.contains("38999"));
    assert_eq!(
        check_event(&event, &ValidatorConfig::default()),
        Err(ValidationError::KindRejected(38999))
    );
}

#[test]
fn test_supporting_kinds_skip_structural_checks() {
    for kind in SUPPORTING_KINDS {
        let event = Event {
            content: "gm".to_string(),
            tags: vec![tag(&["client", "any"])],
            ..create_test_event(kind, vec![], &json!({}))
        };
        let result = validate_event(&event);
        assert!(result.valid, "kind {kind}");
        assert_eq!(result.message, format!("Supporting kind {kind} accepted"));
    }
}

#[test]
fn test_confirmation_requires_match_marker() {
    let mut event = billboard_confirmation_event();
    for tag in &mut event.tags {
        if tag.len() == 4 && tag[3] == "match" {
            tag.truncate(3);
        }
    }
    let result = validate_event(&event);
    assert_eq!(result.message, "Missing e tag with `match` marker");
}

#[test]
fn test_confirmation_requires_five_event_references() {
    let mut event = attention_confirmation_event();
    event.tags.retain(|tag| tag[0] != "e" || tag.len() == 4);
    let result = validate_event(&event);
    assert_eq!(
        result.message,
        "Expected at least 5 e tags (event references), found 1"
    );
}

#[test]
fn test_marketplace_confirmation_requires_both_side_markers() {
    let event = without_tag_value(
        marketplace_confirmation_event(),
        "e",
        "attention-confirmation-id",
    );
    let result = validate_event(&event);
    assert_eq!(
        result.message,
        "Missing e tag with `attention_confirmation` marker"
    );
}

#[test]
fn test_payment_confirmation_requires_positive_sats() {
    let mut content = content_of(&attention_payment_confirmation_event());
    content["sats_received"] = json!(0);
    let result = validate_event(&with_content(attention_payment_confirmation_event(), content));
    assert!(!result.valid);
    assert!(result.message.contains("sats_received"));
}

#[test]
fn test_match_requires_all_deal_coordinates() {
    let event = without_tag_value(match_event(), "a", "38488:");
    let result = validate_event(&event);
    assert!(result.message.contains("Missing attention coordinate"));
}

#[test]
fn test_block_height_must_agree() {
    let mut event = block_event(BLOCK_EVENT_KIND);
    event.tags[1] = tag(&["t", "870501"]);
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.starts_with("Block identifier"));

    let event = with_content(
        block_event(BLOCK_EVENT_KIND),
        json!({ "height": 870499, "hash": BLOCK_HASH }),
    );
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.contains("must equal the t tag block height 870500"));
}

#[test]
fn test_block_identifier_height_must_be_plain_digits() {
    let mut event = block_event(BLOCK_EVENT_KIND);
    for tag in &mut event.tags {
        if tag[0] == "d" {
            tag[1] = format!("org.cityprotocol:block:+870500:{BLOCK_HASH}");
        }
    }
    let result = validate_event(&event);
    assert!(!result.valid);
    assert!(result.message.starts_with("Block identifier"));
}

#[test]
fn test_block_kind_follows_config() {
    let legacy = ValidatorConfig::new(LEGACY_BLOCK_EVENT_KIND).unwrap();
    let event = block_event(LEGACY_BLOCK_EVENT_KIND);

    assert!(validate_event_with(&event, &legacy).valid);
    assert!(!validate_event(&event).valid);
    assert!(!validate_event_with(&block_event(BLOCK_EVENT_KIND), &legacy).valid);
}

#[test]
fn test_marketplace_block_coordinate_follows_config() {
    let legacy = ValidatorConfig::new(LEGACY_BLOCK_EVENT_KIND).unwrap();
    let mut event = without_tag_value(marketplace_event(), "a", "38808:");
    event.tags.push(coordinate(
        LEGACY_BLOCK_EVENT_KIND,
        &format!("org.cityprotocol:block:870500:{BLOCK_HASH}"),
    ));

    assert!(validate_event_with(&event, &legacy).valid);
    assert!(!validate_event(&event).valid);
}

#[test]
fn test_validation_is_idempotent() {
    for event in all_valid_events() {
        let mut broken = event.clone();
        broken.content = "{".to_string();
        assert_eq!(validate_event(&event), validate_event(&event));
        assert_eq!(validate_event(&broken), validate_event(&broken));
    }
}

#[test]
fn test_validation_result_serializes() {
    let result = validate_event(&promotion_event());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json, json!({ "valid": true, "message": "Valid Promotion event" }));
}

quickcheck! {
    fn prop_unofficial_tag_flips_validity(name: String) -> bool {
        if name.is_empty() || crate::kinds::is_official_tag(&name) {
            return true;
        }
        let mut event = promotion_event();
        event.tags.push(vec![name.clone(), "value".to_string()]);
        let result = validate_event(&event);
        !result.valid && result.message.contains(&name)
    }

    fn prop_validation_has_no_hidden_state(kind: u16, content: String) -> bool {
        let mut event = promotion_event();
        event.kind = kind;
        event.content = content;
        validate_event(&event) == validate_event(&event)
    }
}
