//! Marketplace, Billboard, Promotion and Attention validators.

use super::checks::{
    decode_content, require_block_height, require_coordinate, require_exact_tags,
    require_identifier, require_list_coordinate, require_min_tags, require_non_negative,
    require_ordered_durations, require_positive, require_pubkeys, require_relays,
};
use super::{Checked, ValidationError};
use crate::config::ValidatorConfig;
use crate::content::{AttentionContent, BillboardContent, MarketplaceContent, PromotionContent};
use crate::kinds::{AttnKind, KIND_BILLBOARD, KIND_MARKETPLACE, KIND_VIDEO};
use crate::nip01::Event;
use crate::tag_parsing::has_list_coordinate;

pub(crate) fn check_marketplace<'a>(
    event: &'a Event,
    config: &ValidatorConfig,
) -> Result<Checked<'a, MarketplaceContent>, ValidationError> {
    let d_tag = require_identifier(event, AttnKind::Marketplace, config)?;
    let block_height = require_block_height(event)?;
    require_coordinate(event, "block", config.block_event_kind(), config)?;
    require_pubkeys(event, 1)?;
    require_relays(event)?;
    require_min_tags(event, "k", "supported content kinds", 1)?;

    let content: MarketplaceContent = decode_content(event)?;
    Ok(Checked {
        d_tag,
        block_height,
        content,
    })
}

pub(crate) fn check_billboard<'a>(
    event: &'a Event,
    config: &ValidatorConfig,
) -> Result<Checked<'a, BillboardContent>, ValidationError> {
    let d_tag = require_identifier(event, AttnKind::Billboard, config)?;
    let block_height = require_block_height(event)?;
    require_coordinate(event, "marketplace", KIND_MARKETPLACE, config)?;
    require_pubkeys(event, 2)?;
    require_relays(event)?;
    require_min_tags(event, "k", "supported content kinds", 1)?;
    require_min_tags(event, "u", "billboard URL", 1)?;

    let content: BillboardContent = decode_content(event)?;
    require_non_negative("confirmation_fee_sats", content.confirmation_fee_sats)?;
    Ok(Checked {
        d_tag,
        block_height,
        content,
    })
}

pub(crate) fn check_promotion<'a>(
    event: &'a Event,
    config: &ValidatorConfig,
) -> Result<Checked<'a, PromotionContent>, ValidationError> {
    let d_tag = require_identifier(event, AttnKind::Promotion, config)?;
    let block_height = require_block_height(event)?;
    require_coordinate(event, "marketplace", KIND_MARKETPLACE, config)?;
    require_coordinate(event, "video", KIND_VIDEO, config)?;
    require_coordinate(event, "billboard", KIND_BILLBOARD, config)?;
    require_pubkeys(event, 3)?;
    require_relays(event)?;
    require_exact_tags(event, "k", "promoted content kind", 1)?;
    require_min_tags(event, "u", "promotion URL", 1)?;

    let content: PromotionContent = decode_content(event)?;
    require_positive("bid", content.bid)?;
    require_positive("duration", content.duration)?;
    Ok(Checked {
        d_tag,
        block_height,
        content,
    })
}

pub(crate) fn check_attention<'a>(
    event: &'a Event,
    config: &ValidatorConfig,
) -> Result<Checked<'a, AttentionContent>, ValidationError> {
    let d_tag = require_identifier(event, AttnKind::Attention, config)?;
    let block_height = require_block_height(event)?;
    require_coordinate(event, "marketplace", KIND_MARKETPLACE, config)?;
    require_list_coordinate(event, "blocked promotions", "promotion:blocked")?;
    require_list_coordinate(event, "blocked promoters", "promoter:blocked")?;
    require_pubkeys(event, 2)?;
    require_relays(event)?;
    require_min_tags(event, "k", "accepted content kinds", 1)?;

    let content: AttentionContent = decode_content(event)?;
    if has_list_coordinate(event, "marketplace:trusted") && content.trusted_marketplaces_id.is_none()
    {
        return Err(ValidationError::MissingContentField("trusted_marketplaces_id"));
    }
    if has_list_coordinate(event, "billboard:trusted") && content.trusted_billboards_id.is_none() {
        return Err(ValidationError::MissingContentField("trusted_billboards_id"));
    }

    require_positive("ask", content.ask)?;
    require_positive("min_duration", content.min_duration)?;
    require_positive("max_duration", content.max_duration)?;
    require_ordered_durations(content.min_duration, content.max_duration)?;
    Ok(Checked {
        d_tag,
        block_height,
        content,
    })
}
