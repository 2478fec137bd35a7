pub mod admission;
pub mod builders;
pub mod config;
pub mod content;
pub mod grammar;
pub mod kinds;
pub mod model;
pub mod nip01;
mod tag_parsing;
pub mod validate;

pub use admission::{Admission, Decision, INVALID_PREFIX};
#[cfg(feature = "full")]
pub use builders::finalize_attn_event;
pub use builders::{
    AttentionBuilder, BillboardBuilder, BlockBuilder, BuildError, ConfirmationBuilder,
    ConfirmationSide, DealEvents, ListBuilder, ListType, MarketplaceBuilder,
    MarketplaceConfirmationBuilder, MatchBuilder, PaymentConfirmationBuilder, PromotionBuilder,
    check_template, list_coordinate,
};
pub use config::{ConfigError, ENV_BLOCK_EVENT_KIND, ValidatorConfig};
pub use grammar::{
    Coordinate, FormatError, format_block_identifier, format_identifier, parse_block_height,
    split_identifier, validate_coordinate_format, validate_identifier_format,
};
pub use kinds::*;
pub use model::{Addressed, AttnEvent, EventHeader};
pub use nip01::{Event, EventTemplate, Nip01Error, UnsignedEvent};
#[cfg(feature = "full")]
pub use nip01::{finalize_event, generate_secret_key, get_public_key_hex, verify_event};
pub use tag_parsing::{
    e_tag_value_with_marker, e_tag_with_marker, has_list_coordinate, tag_value_by_prefix,
    tag_values,
};
pub use validate::{
    ValidationError, ValidationResult, check_event, check_official_tags, validate_attention,
    validate_attention_confirmation, validate_attention_payment_confirmation, validate_billboard,
    validate_billboard_confirmation, validate_block, validate_event, validate_event_with,
    validate_marketplace, validate_marketplace_confirmation, validate_match, validate_promotion,
};
