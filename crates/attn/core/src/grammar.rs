//! Identifier (`d` tag) and coordinate (`a` tag) grammar.
//!
//! Identifier: `<namespace>:<event_type>:<id>` where the id may itself contain `:`.
//! Coordinate: `<kind>:<pubkey>:<d-tag value>`, so protocol coordinates read
//! `<kind>:<pubkey>:<namespace>:<event_type>:<id>`.

use crate::config::ValidatorConfig;
use crate::kinds::{
    ATTN_NAMESPACE, AttnKind, BLOCK_EVENT_TYPE, CITY_NAMESPACE, event_type_for_kind,
    is_protocol_range,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Grammar violations. Each variant renders a distinct message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("value is empty")]
    EmptyValue,

    #[error("unknown kind {0}: no identifier format is defined")]
    UnknownKind(u16),

    #[error("namespace must be `{expected}`, got `{found}`")]
    WrongNamespace { expected: &'static str, found: String },

    #[error("event type must be `{expected}`, got `{found}`")]
    WrongEventType { expected: &'static str, found: String },

    #[error("identifier segment is missing or empty")]
    MissingIdentifier,

    #[error("expected at least {required} `:`-separated segments, got {found}")]
    TooFewSegments { required: usize, found: usize },

    #[error("kind prefix `{0}` is not numeric")]
    NonNumericKind(String),

    #[error("kind prefix {found} does not match expected kind {expected}")]
    KindMismatch { expected: u16, found: u32 },

    #[error("event type segment is empty")]
    MissingEventType,
}

/// Format a `d` tag value for one of the nine ATTN kinds.
pub fn format_identifier(kind: u16, id: &str) -> Result<String, FormatError> {
    let event_type = event_type_for_kind(kind).ok_or(FormatError::UnknownKind(kind))?;
    if id.is_empty() {
        return Err(FormatError::MissingIdentifier);
    }
    Ok(format!("{ATTN_NAMESPACE}:{event_type}:{id}"))
}

/// Format the `d` tag value of a block event. Heights are plain base-10.
pub fn format_block_identifier(height: u64, hash: &str) -> String {
    format!("{CITY_NAMESPACE}:{BLOCK_EVENT_TYPE}:{height}:{hash}")
}

/// Parse a block height written as plain base-10 digits. Signs, whitespace
/// and other `u64::from_str` leniencies are refused.
pub fn parse_block_height(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Split a `d` tag value into `(namespace, event_type, id)`.
pub fn split_identifier(d_tag: &str) -> Option<(&str, &str, &str)> {
    let mut parts = d_tag.splitn(3, ':');
    Some((parts.next()?, parts.next()?, parts.next()?))
}

/// Validate a `d` tag value against the format required by `kind`.
pub fn validate_identifier_format(
    kind: u16,
    d_tag: &str,
    config: &ValidatorConfig,
) -> Result<(), FormatError> {
    if d_tag.is_empty() {
        return Err(FormatError::EmptyValue);
    }
    let attn_kind = AttnKind::from_kind(kind, config).ok_or(FormatError::UnknownKind(kind))?;
    let expected_namespace = attn_kind.namespace();
    let expected_type = attn_kind.event_type();

    let mut parts = d_tag.splitn(3, ':');
    let namespace = parts.next().unwrap_or_default();
    if namespace != expected_namespace {
        return Err(FormatError::WrongNamespace {
            expected: expected_namespace,
            found: namespace.to_string(),
        });
    }
    let event_type = parts.next().unwrap_or_default();
    if event_type != expected_type {
        return Err(FormatError::WrongEventType {
            expected: expected_type,
            found: event_type.to_string(),
        });
    }
    match parts.next() {
        Some(id) if !id.is_empty() => Ok(()),
        _ => Err(FormatError::MissingIdentifier),
    }
}

/// Validate an `a` tag value as a reference to an event of `expected_kind`.
///
/// Protocol kinds (38188-38988) and the configured block kind must carry their
/// namespace and a non-empty event type; any other kind only gets the kind
/// prefix check.
pub fn validate_coordinate_format(
    coordinate: &str,
    expected_kind: u16,
    config: &ValidatorConfig,
) -> Result<(), FormatError> {
    if coordinate.is_empty() {
        return Err(FormatError::EmptyValue);
    }
    let parts: Vec<&str> = coordinate.split(':').collect();
    if parts.len() < 3 {
        return Err(FormatError::TooFewSegments {
            required: 3,
            found: parts.len(),
        });
    }
    let found = parts[0]
        .parse::<u32>()
        .map_err(|_| FormatError::NonNumericKind(parts[0].to_string()))?;
    if found != u32::from(expected_kind) {
        return Err(FormatError::KindMismatch {
            expected: expected_kind,
            found,
        });
    }

    let namespace = if expected_kind == config.block_event_kind() {
        CITY_NAMESPACE
    } else if is_protocol_range(expected_kind) {
        ATTN_NAMESPACE
    } else {
        return Ok(());
    };

    if parts.len() < 5 {
        return Err(FormatError::TooFewSegments {
            required: 5,
            found: parts.len(),
        });
    }
    if parts[2] != namespace {
        return Err(FormatError::WrongNamespace {
            expected: namespace,
            found: parts[2].to_string(),
        });
    }
    if parts[3].is_empty() {
        return Err(FormatError::MissingEventType);
    }
    Ok(())
}

/// A parsed `<kind>:<pubkey>:<d-tag>` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub kind: u16,
    pub pubkey: String,
    /// Full `d` tag value of the referenced event.
    pub identifier: String,
}

impl Coordinate {
    pub fn new(kind: u16, pubkey: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            kind,
            pubkey: pubkey.into(),
            identifier: identifier.into(),
        }
    }

    /// Coordinate of an ATTN event given its bare id.
    pub fn attn(kind: u16, pubkey: impl Into<String>, id: &str) -> Result<Self, FormatError> {
        Ok(Self::new(kind, pubkey, format_identifier(kind, id)?))
    }

    /// Coordinate of a block event.
    pub fn block(block_kind: u16, pubkey: impl Into<String>, height: u64, hash: &str) -> Self {
        Self::new(block_kind, pubkey, format_block_identifier(height, hash))
    }

    /// The id portion of a namespaced identifier, or the whole identifier otherwise.
    pub fn id(&self) -> &str {
        split_identifier(&self.identifier).map_or(self.identifier.as_str(), |(_, _, id)| id)
    }

    pub fn to_tag(&self) -> Vec<String> {
        vec!["a".to_string(), self.to_string()]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.pubkey, self.identifier)
    }
}

impl FromStr for Coordinate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let kind_part = parts.next().unwrap_or_default();
        let (Some(pubkey), Some(identifier)) = (parts.next(), parts.next()) else {
            return Err(FormatError::TooFewSegments {
                required: 3,
                found: s.split(':').count(),
            });
        };
        let kind = kind_part
            .parse::<u16>()
            .map_err(|_| FormatError::NonNumericKind(kind_part.to_string()))?;
        Ok(Self::new(kind, pubkey, identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{
        KIND_BILLBOARD, KIND_MARKETPLACE, KIND_PROMOTION, KIND_VIDEO, LEGACY_BLOCK_EVENT_KIND,
    };

    fn config() -> ValidatorConfig {
        ValidatorConfig::default()
    }

    #[test]
    fn test_block_height_is_plain_digits() {
        assert_eq!(parse_block_height("870500"), Some(870_500));
        assert_eq!(parse_block_height("0"), Some(0));
        assert_eq!(parse_block_height("+870500"), None);
        assert_eq!(parse_block_height("-1"), None);
        assert_eq!(parse_block_height(" 870500"), None);
        assert_eq!(parse_block_height(""), None);
        assert_eq!(parse_block_height("99999999999999999999"), None);
    }

    #[test]
    fn test_identifier_accepts_matching_event_type() {
        assert!(
            validate_identifier_format(
                KIND_PROMOTION,
                "org.attnprotocol:promotion:test-promotion",
                &config()
            )
            .is_ok()
        );
    }

    #[test]
    fn test_identifier_allows_colons_in_id() {
        assert!(
            validate_identifier_format(KIND_MARKETPLACE, "org.attnprotocol:marketplace:a:b:c", &config())
                .is_ok()
        );
    }

    #[test]
    fn test_identifier_errors_are_distinguishable() {
        let cfg = config();
        assert_eq!(
            validate_identifier_format(KIND_PROMOTION, "", &cfg),
            Err(FormatError::EmptyValue)
        );
        assert_eq!(
            validate_identifier_format(KIND_PROMOTION, "org.other:promotion:x", &cfg),
            Err(FormatError::WrongNamespace {
                expected: "org.attnprotocol",
                found: "org.other".to_string(),
            })
        );
        assert_eq!(
            validate_identifier_format(KIND_PROMOTION, "org.attnprotocol:billboard:x", &cfg),
            Err(FormatError::WrongEventType {
                expected: "promotion",
                found: "billboard".to_string(),
            })
        );
        assert_eq!(
            validate_identifier_format(KIND_PROMOTION, "org.attnprotocol:promotion:", &cfg),
            Err(FormatError::MissingIdentifier)
        );
        assert_eq!(
            validate_identifier_format(KIND_PROMOTION, "org.attnprotocol:promotion", &cfg),
            Err(FormatError::MissingIdentifier)
        );
        assert_eq!(
            validate_identifier_format(1, "org.attnprotocol:note:x", &cfg),
            Err(FormatError::UnknownKind(1))
        );
    }

    #[test]
    fn test_block_identifier_uses_configured_kind() {
        let d = format_block_identifier(870500, "00000000abc");
        assert_eq!(d, "org.cityprotocol:block:870500:00000000abc");
        assert!(validate_identifier_format(38808, &d, &config()).is_ok());
        assert_eq!(
            validate_identifier_format(LEGACY_BLOCK_EVENT_KIND, &d, &config()),
            Err(FormatError::UnknownKind(LEGACY_BLOCK_EVENT_KIND))
        );

        let legacy = ValidatorConfig::new(LEGACY_BLOCK_EVENT_KIND).unwrap();
        assert!(validate_identifier_format(LEGACY_BLOCK_EVENT_KIND, &d, &legacy).is_ok());
        assert!(matches!(
            validate_identifier_format(38808, "org.attnprotocol:block:1:h", &config()),
            Err(FormatError::WrongNamespace { .. })
        ));
    }

    #[test]
    fn test_coordinate_protocol_kind() {
        let cfg = config();
        assert!(
            validate_coordinate_format(
                "38188:pk:org.attnprotocol:marketplace:test-marketplace",
                KIND_MARKETPLACE,
                &cfg
            )
            .is_ok()
        );
        assert_eq!(
            validate_coordinate_format("38188:pk:org.other:marketplace:m", KIND_MARKETPLACE, &cfg),
            Err(FormatError::WrongNamespace {
                expected: "org.attnprotocol",
                found: "org.other".to_string(),
            })
        );
        assert_eq!(
            validate_coordinate_format("38188:pk:org.attnprotocol", KIND_MARKETPLACE, &cfg),
            Err(FormatError::TooFewSegments {
                required: 5,
                found: 3
            })
        );
        assert_eq!(
            validate_coordinate_format("38188:pk:org.attnprotocol::m", KIND_MARKETPLACE, &cfg),
            Err(FormatError::MissingEventType)
        );
    }

    #[test]
    fn test_coordinate_kind_prefix_errors() {
        let cfg = config();
        assert_eq!(
            validate_coordinate_format("", KIND_BILLBOARD, &cfg),
            Err(FormatError::EmptyValue)
        );
        assert_eq!(
            validate_coordinate_format("38288", KIND_BILLBOARD, &cfg),
            Err(FormatError::TooFewSegments {
                required: 3,
                found: 1
            })
        );
        assert_eq!(
            validate_coordinate_format("abc:pk:org.attnprotocol:billboard:b", KIND_BILLBOARD, &cfg),
            Err(FormatError::NonNumericKind("abc".to_string()))
        );
        assert_eq!(
            validate_coordinate_format("38188:pk:org.attnprotocol:billboard:b", KIND_BILLBOARD, &cfg),
            Err(FormatError::KindMismatch {
                expected: KIND_BILLBOARD,
                found: 38188
            })
        );
    }

    #[test]
    fn test_coordinate_non_protocol_kind_skips_namespace() {
        assert!(validate_coordinate_format("34236:pk:test-video", KIND_VIDEO, &config()).is_ok());
    }

    #[test]
    fn test_coordinate_block_kind_requires_city_namespace() {
        let cfg = config();
        assert!(
            validate_coordinate_format("38808:pk:org.cityprotocol:block:870500:hash", 38808, &cfg)
                .is_ok()
        );
        assert!(matches!(
            validate_coordinate_format("38808:pk:org.attnprotocol:block:870500:hash", 38808, &cfg),
            Err(FormatError::WrongNamespace { .. })
        ));
    }

    #[test]
    fn test_coordinate_value_round_trip() {
        let coordinate = Coordinate::attn(KIND_BILLBOARD, "pk", "main:slot").unwrap();
        assert_eq!(
            coordinate.to_string(),
            "38288:pk:org.attnprotocol:billboard:main:slot"
        );
        assert_eq!(coordinate.id(), "main:slot");

        let parsed: Coordinate = coordinate.to_string().parse().unwrap();
        assert_eq!(parsed, coordinate);
        assert_eq!(
            "34236:pk:test-video".parse::<Coordinate>().unwrap().id(),
            "test-video"
        );
    }

    quickcheck::quickcheck! {
        fn prop_coordinate_rejects_other_kind_prefix(prefix: u32, expected: u16, rest: String) -> bool {
            if prefix == u32::from(expected) {
                return true;
            }
            let coordinate = format!("{prefix}:{rest}:org.attnprotocol:marketplace:id");
            matches!(
                validate_coordinate_format(&coordinate, expected, &config()),
                Err(FormatError::KindMismatch { .. })
            )
        }

        fn prop_coordinate_display_parse_round_trip(kind: u16, id: String) -> bool {
            let coordinate = Coordinate::new(kind, "pk", id);
            coordinate.to_string().parse::<Coordinate>().ok() == Some(coordinate)
        }
    }
}
