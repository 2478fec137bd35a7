use super::ValidationError;
use crate::config::ValidatorConfig;
use crate::content::{ContentSchema, FieldType};
use crate::grammar::{parse_block_height, validate_coordinate_format, validate_identifier_format};
use crate::kinds::AttnKind;
use crate::nip01::Event;
use crate::tag_parsing::{
    count_tags, e_tag_with_marker, find_tag_value, has_list_coordinate, tag_value_by_prefix,
};
use serde_json::Value;

pub(super) fn require_identifier<'a>(
    event: &'a Event,
    kind: AttnKind,
    config: &ValidatorConfig,
) -> Result<&'a str, ValidationError> {
    let d_tag = find_tag_value(&event.tags, "d").ok_or(ValidationError::MissingIdentifier)?;
    validate_identifier_format(kind.number(config), d_tag, config)
        .map_err(ValidationError::InvalidIdentifier)?;
    Ok(d_tag)
}

pub(super) fn require_block_height(event: &Event) -> Result<u64, ValidationError> {
    let value = find_tag_value(&event.tags, "t").ok_or(ValidationError::MissingBlockHeight)?;
    parse_block_height(value)
        .ok_or_else(|| ValidationError::NonNumericBlockHeight(value.to_string()))
}

pub(super) fn require_coordinate<'a>(
    event: &'a Event,
    label: &'static str,
    kind: u16,
    config: &ValidatorConfig,
) -> Result<&'a str, ValidationError> {
    let coordinate = tag_value_by_prefix(event, "a", &format!("{kind}:"))
        .ok_or(ValidationError::MissingCoordinate { label, kind })?;
    validate_coordinate_format(coordinate, kind, config)
        .map_err(|error| ValidationError::InvalidCoordinate { label, error })?;
    Ok(coordinate)
}

pub(super) fn require_list_coordinate(
    event: &Event,
    label: &'static str,
    suffix: &'static str,
) -> Result<(), ValidationError> {
    if has_list_coordinate(event, suffix) {
        Ok(())
    } else {
        Err(ValidationError::MissingListCoordinate { label, suffix })
    }
}

pub(super) fn require_marker(event: &Event, marker: &'static str) -> Result<(), ValidationError> {
    if e_tag_with_marker(event, marker) {
        Ok(())
    } else {
        Err(ValidationError::MissingMarkedReference(marker))
    }
}

pub(super) fn require_event_references(
    event: &Event,
    required: usize,
) -> Result<(), ValidationError> {
    let found = count_tags(&event.tags, "e");
    if found < required {
        return Err(ValidationError::InsufficientEventReferences { required, found });
    }
    Ok(())
}

pub(super) fn require_min_tags(
    event: &Event,
    tag: &'static str,
    what: &'static str,
    required: usize,
) -> Result<(), ValidationError> {
    let found = count_tags(&event.tags, tag);
    if found < required {
        return Err(ValidationError::InsufficientTags {
            tag,
            what,
            required,
            found,
        });
    }
    Ok(())
}

pub(super) fn require_exact_tags(
    event: &Event,
    tag: &'static str,
    what: &'static str,
    expected: usize,
) -> Result<(), ValidationError> {
    let found = count_tags(&event.tags, tag);
    if found != expected {
        return Err(ValidationError::TagCountMismatch {
            tag,
            what,
            expected,
            found,
        });
    }
    Ok(())
}

pub(super) fn require_relays(event: &Event) -> Result<(), ValidationError> {
    require_min_tags(event, "r", "relay URLs", 1)
}

pub(super) fn require_pubkeys(event: &Event, required: usize) -> Result<(), ValidationError> {
    require_min_tags(event, "p", "pubkeys", required)
}

/// Parse JSON content, then check presence of every required field, then
/// their JSON types, then decode into the typed schema.
pub(super) fn decode_content<T: ContentSchema>(event: &Event) -> Result<T, ValidationError> {
    let value: Value = serde_json::from_str(&event.content)
        .map_err(|error| ValidationError::InvalidJson(error.to_string()))?;
    let object = value.as_object().ok_or(ValidationError::ContentNotObject)?;

    for &(field, _) in T::REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(ValidationError::MissingContentField(field));
        }
    }
    for &(field, field_type) in T::REQUIRED_FIELDS {
        let value = object.get(field);
        let above_i64 = value.is_some_and(|value| value.is_u64() && value.as_i64().is_none());
        if field_type == FieldType::Integer && above_i64 {
            return Err(ValidationError::ContentRange {
                field,
                constraint: format!("must not exceed {}", i64::MAX),
            });
        }
        if !value.is_some_and(|value| field_type.matches(value)) {
            return Err(ValidationError::ContentFieldType {
                field,
                expected: field_type.as_str(),
            });
        }
    }

    serde_json::from_value(value).map_err(|error| ValidationError::ContentDecode(error.to_string()))
}

pub(super) fn require_positive(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::ContentRange {
            field,
            constraint: format!("must be greater than 0, got {value}"),
        });
    }
    Ok(())
}

pub(super) fn require_non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::ContentRange {
            field,
            constraint: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

pub(super) fn require_ordered_durations(min: i64, max: i64) -> Result<(), ValidationError> {
    if min > max {
        return Err(ValidationError::ContentRange {
            field: "min_duration",
            constraint: format!("must not exceed max_duration ({min} > {max})"),
        });
    }
    Ok(())
}
