//! Splitting polymorphic nodes into tag and payload, and the inverse.

use super::config::{ResolverConfig, TagLayout};
use crate::core::{Family, ResolveError, Result};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// A polymorphic node split into its type tag and remaining fields
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedNode<'a> {
    /// Tag exactly as written in the document
    pub tag: &'a str,
    /// Every field except the tag
    pub payload: JsonValue,
    /// Layout the tag was found in (never `Auto`)
    pub layout: TagLayout,
}

/// Read the type tag out of `node` without modifying it.
///
/// Fails with [`ResolveError::MissingTypeTag`] when the configured layout
/// does not yield a string tag.
pub fn split_tagged<'a>(
    family: Family,
    node: &'a JsonValue,
    config: &ResolverConfig,
) -> Result<TaggedNode<'a>> {
    let missing = |detail: String| ResolveError::MissingTypeTag { family, detail };

    let fields = node.as_object().ok_or_else(|| {
        missing(format!("expected a JSON object, found {}", json_kind(node)))
    })?;

    match config.layout {
        TagLayout::Property => split_property(fields, &config.type_key).map_err(missing),
        TagLayout::WrapperObject => split_wrapper(fields).map_err(missing),
        TagLayout::Auto => {
            if fields.contains_key(&config.type_key) {
                split_property(fields, &config.type_key).map_err(missing)
            } else {
                split_wrapper(fields).map_err(|detail| {
                    missing(format!("field '{}' is absent and {}", config.type_key, detail))
                })
            }
        }
    }
}

fn split_property<'a>(
    fields: &'a Map<String, JsonValue>,
    type_key: &str,
) -> std::result::Result<TaggedNode<'a>, String> {
    let tag = match fields.get(type_key) {
        Some(JsonValue::String(tag)) => tag.as_str(),
        Some(other) => {
            return Err(format!(
                "field '{}' must be a string, found {}",
                type_key,
                json_kind(other)
            ));
        }
        None => return Err(format!("field '{}' is absent", type_key)),
    };

    let payload: Map<String, JsonValue> = fields
        .iter()
        .filter(|(key, _)| key.as_str() != type_key)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(TaggedNode {
        tag,
        payload: JsonValue::Object(payload),
        layout: TagLayout::Property,
    })
}

fn split_wrapper(fields: &Map<String, JsonValue>) -> std::result::Result<TaggedNode<'_>, String> {
    let mut entries = fields.iter();
    match (entries.next(), entries.next()) {
        (Some((tag, inner @ JsonValue::Object(_))), None) => Ok(TaggedNode {
            tag: tag.as_str(),
            payload: inner.clone(),
            layout: TagLayout::WrapperObject,
        }),
        (Some((tag, inner)), None) => Err(format!(
            "wrapper '{}' must hold an object, found {}",
            tag,
            json_kind(inner)
        )),
        (None, _) => Err("the object is empty".to_string()),
        _ => Err(format!(
            "a wrapper object must have exactly one field, found {}",
            fields.len()
        )),
    }
}

/// Serialize `value` and tag it with `type_id` under the configured layout.
/// `Auto` writes the property layout.
pub fn encode_tagged<S>(type_id: &str, value: &S, config: &ResolverConfig) -> Result<JsonValue>
where
    S: Serialize + ?Sized,
{
    let payload = serde_json::to_value(value)?;
    attach_tag(type_id, payload, config.layout, &config.type_key)
}

pub(crate) fn attach_tag(
    type_id: &str,
    payload: JsonValue,
    layout: TagLayout,
    type_key: &str,
) -> Result<JsonValue> {
    match layout {
        TagLayout::WrapperObject => {
            let mut wrapper = Map::new();
            wrapper.insert(type_id.to_string(), payload);
            Ok(JsonValue::Object(wrapper))
        }
        TagLayout::Property | TagLayout::Auto => match payload {
            JsonValue::Object(mut fields) => {
                fields.insert(type_key.to_string(), JsonValue::String(type_id.to_string()));
                Ok(JsonValue::Object(fields))
            }
            other => Err(ResolveError::InvalidPayload(format!(
                "'{}' encoded to {}, property layout needs an object",
                type_id,
                json_kind(&other)
            ))),
        },
    }
}

pub(crate) fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
