//! Tag lookups shared by the validators, the typed model, and relays.

use crate::kinds::KIND_LIST;
use crate::nip01::Event;

pub(crate) fn tag_name(tag: &[String]) -> Option<&str> {
    tag.first().map(String::as_str)
}

pub(crate) fn tag_field(tag: &[String], index: usize) -> Option<&str> {
    tag.get(index).map(String::as_str)
}

pub(crate) fn is_tag(tag: &[String], name: &str) -> bool {
    matches!(tag_name(tag), Some(tag_name) if tag_name == name)
}

pub(crate) fn find_tag_value<'a>(tags: &'a [Vec<String>], name: &str) -> Option<&'a str> {
    tags.iter()
        .find(|tag| is_tag(tag, name) && tag_field(tag, 1).is_some())
        .and_then(|tag| tag_field(tag, 1))
}

pub(crate) fn count_tags(tags: &[Vec<String>], name: &str) -> usize {
    tags.iter()
        .filter(|tag| is_tag(tag, name) && tag_field(tag, 1).is_some())
        .count()
}

/// All values (second element) of tags named `name`, in document order.
pub fn tag_values<'a>(event: &'a Event, name: &str) -> Vec<&'a str> {
    event
        .tags
        .iter()
        .filter(|tag| is_tag(tag, name))
        .filter_map(|tag| tag_field(tag, 1))
        .collect()
}

/// First value of a tag named `name` that starts with `prefix`.
pub fn tag_value_by_prefix<'a>(event: &'a Event, name: &str, prefix: &str) -> Option<&'a str> {
    event
        .tags
        .iter()
        .filter(|tag| is_tag(tag, name))
        .filter_map(|tag| tag_field(tag, 1))
        .find(|value| value.starts_with(prefix))
}

/// True iff an `e` tag carries `marker` in its fourth position (NIP-10 style).
pub fn e_tag_with_marker(event: &Event, marker: &str) -> bool {
    event
        .tags
        .iter()
        .any(|tag| is_tag(tag, "e") && tag.len() >= 4 && tag_field(tag, 3) == Some(marker))
}

/// Event id of the first `e` tag carrying `marker`.
pub fn e_tag_value_with_marker<'a>(event: &'a Event, marker: &str) -> Option<&'a str> {
    event
        .tags
        .iter()
        .find(|tag| is_tag(tag, "e") && tag.len() >= 4 && tag_field(tag, 3) == Some(marker))
        .and_then(|tag| tag_field(tag, 1))
}

/// True iff an `a` tag points at a NIP-51 list whose coordinate ends with `suffix`.
pub fn has_list_coordinate(event: &Event, suffix: &str) -> bool {
    let prefix = format!("{KIND_LIST}:");
    tag_values(event, "a")
        .into_iter()
        .any(|value| value.starts_with(&prefix) && value.ends_with(suffix))
}
