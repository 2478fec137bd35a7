//! Block events are authored by the clock service; relays only check that
//! the identifier, block height tag and content agree with each other.

use super::checks::{decode_content, require_block_height, require_identifier, require_non_negative};
use super::{Checked, ValidationError};
use crate::config::ValidatorConfig;
use crate::content::BlockContent;
use crate::grammar::parse_block_height;
use crate::kinds::{AttnKind, BLOCK_EVENT_TYPE, CITY_NAMESPACE};
use crate::nip01::Event;

pub(crate) fn check_block<'a>(
    event: &'a Event,
    config: &ValidatorConfig,
) -> Result<Checked<'a, BlockContent>, ValidationError> {
    let d_tag = require_identifier(event, AttnKind::Block, config)?;
    let block_height = require_block_height(event)?;

    let prefix = format!("{CITY_NAMESPACE}:{BLOCK_EVENT_TYPE}:");
    let identifier_height = d_tag
        .strip_prefix(&prefix)
        .and_then(|rest| rest.split_once(':'))
        .filter(|(_, hash)| !hash.is_empty())
        .and_then(|(height, _)| parse_block_height(height));
    if identifier_height != Some(block_height) {
        return Err(ValidationError::BlockIdentifierMismatch {
            identifier: d_tag.to_string(),
            height: block_height,
        });
    }

    let content: BlockContent = decode_content(event)?;
    require_non_negative("height", content.height)?;
    if u64::try_from(content.height).ok() != Some(block_height) {
        return Err(ValidationError::ContentRange {
            field: "height",
            constraint: format!("must equal the t tag block height {block_height}"),
        });
    }
    if content.hash.is_empty() {
        return Err(ValidationError::ContentRange {
            field: "hash",
            constraint: "must not be empty".to_string(),
        });
    }
    Ok(Checked {
        d_tag,
        block_height,
        content,
    })
}
