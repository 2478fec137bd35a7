//! Match and confirmation validators.
//!
//! Confirmations reference all five deal coordinates and disambiguate their
//! `e` references with NIP-10 style markers.

use super::checks::{
    decode_content, require_block_height, require_coordinate, require_event_references,
    require_identifier, require_marker, require_positive, require_pubkeys, require_relays,
};
use super::{Checked, ValidationError};
use crate::config::ValidatorConfig;
use crate::content::{
    AttentionPaymentConfirmationContent, MarketplaceConfirmationContent, MatchConfirmationContent,
    MatchContent,
};
use crate::kinds::{
    AttnKind, KIND_ATTENTION, KIND_BILLBOARD, KIND_MARKETPLACE, KIND_MATCH, KIND_PROMOTION,
    MARKER_ATTENTION_CONFIRMATION, MARKER_BILLBOARD_CONFIRMATION, MARKER_MARKETPLACE_CONFIRMATION,
    MARKER_MATCH,
};
use crate::nip01::Event;

fn require_deal_coordinates(event: &Event, config: &ValidatorConfig) -> Result<(), ValidationError> {
    require_coordinate(event, "marketplace", KIND_MARKETPLACE, config)?;
    require_coordinate(event, "billboard", KIND_BILLBOARD, config)?;
    require_coordinate(event, "promotion", KIND_PROMOTION, config)?;
    require_coordinate(event, "attention", KIND_ATTENTION, config)?;
    Ok(())
}

pub(crate) fn check_match<'a>(
    event: &'a Event,
    config: &ValidatorConfig,
) -> Result<Checked<'a, MatchContent>, ValidationError> {
    let d_tag = require_identifier(event, AttnKind::Match, config)?;
    let block_height = require_block_height(event)?;
    require_deal_coordinates(event, config)?;
    require_pubkeys(event, 4)?;
    require_relays(event)?;

    let content: MatchContent = decode_content(event)?;
    Ok(Checked {
        d_tag,
        block_height,
        content,
    })
}

fn check_match_confirmation<'a>(
    event: &'a Event,
    kind: AttnKind,
    config: &ValidatorConfig,
) -> Result<Checked<'a, MatchConfirmationContent>, ValidationError> {
    let d_tag = require_identifier(event, kind, config)?;
    let block_height = require_block_height(event)?;
    require_deal_coordinates(event, config)?;
    require_coordinate(event, "match", KIND_MATCH, config)?;
    require_marker(event, MARKER_MATCH)?;
    require_event_references(event, 5)?;
    require_pubkeys(event, 4)?;
    require_relays(event)?;

    let content: MatchConfirmationContent = decode_content(event)?;
    Ok(Checked {
        d_tag,
        block_height,
        content,
    })
}

pub(crate) fn check_billboard_confirmation<'a>(
    event: &'a Event,
    config: &ValidatorConfig,
) -> Result<Checked<'a, MatchConfirmationContent>, ValidationError> {
    check_match_confirmation(event, AttnKind::BillboardConfirmation, config)
}

pub(crate) fn check_attention_confirmation<'a>(
    event: &'a Event,
    config: &ValidatorConfig,
) -> Result<Checked<'a, MatchConfirmationContent>, ValidationError> {
    check_match_confirmation(event, AttnKind::AttentionConfirmation, config)
}

pub(crate) fn check_marketplace_confirmation<'a>(
    event: &'a Event,
    config: &ValidatorConfig,
) -> Result<Checked<'a, MarketplaceConfirmationContent>, ValidationError> {
    let d_tag = require_identifier(event, AttnKind::MarketplaceConfirmation, config)?;
    let block_height = require_block_height(event)?;
    require_deal_coordinates(event, config)?;
    require_coordinate(event, "match", KIND_MATCH, config)?;
    require_marker(event, MARKER_MATCH)?;
    require_marker(event, MARKER_BILLBOARD_CONFIRMATION)?;
    require_marker(event, MARKER_ATTENTION_CONFIRMATION)?;
    require_event_references(event, 7)?;
    require_pubkeys(event, 4)?;
    require_relays(event)?;

    let content: MarketplaceConfirmationContent = decode_content(event)?;
    Ok(Checked {
        d_tag,
        block_height,
        content,
    })
}

pub(crate) fn check_attention_payment_confirmation<'a>(
    event: &'a Event,
    config: &ValidatorConfig,
) -> Result<Checked<'a, AttentionPaymentConfirmationContent>, ValidationError> {
    let d_tag = require_identifier(event, AttnKind::AttentionPaymentConfirmation, config)?;
    let block_height = require_block_height(event)?;
    require_deal_coordinates(event, config)?;
    require_coordinate(event, "match", KIND_MATCH, config)?;
    require_marker(event, MARKER_MARKETPLACE_CONFIRMATION)?;
    require_pubkeys(event, 4)?;
    require_relays(event)?;

    let content: AttentionPaymentConfirmationContent = decode_content(event)?;
    require_positive("sats_received", content.sats_received)?;
    Ok(Checked {
        d_tag,
        block_height,
        content,
    })
}
