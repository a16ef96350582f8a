use crate::core::{Family, ResolveError, Result};
use crate::document::{ResolverConfig, TagLayout, attach_tag, json_kind, split_tagged};
use crate::legacy::{LegacyNameRegistry, ResolvedType};
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

/// Reads a node's tag and maps legacy short names to canonical identifiers
/// for one family. Does not construct anything.
#[derive(Debug, Clone)]
pub struct LegacyTagRewriter {
    registry: &'static LegacyNameRegistry,
    config: ResolverConfig,
}

impl LegacyTagRewriter {
    pub fn new(family: Family) -> Self {
        Self::with_config(family, ResolverConfig::default())
    }

    pub fn with_config(family: Family, config: ResolverConfig) -> Self {
        Self {
            registry: LegacyNameRegistry::for_family(family),
            config,
        }
    }

    pub fn family(&self) -> Family {
        self.registry.family()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn registry(&self) -> &'static LegacyNameRegistry {
        self.registry
    }

    /// Map a tag through the registry unless rewriting is disabled
    pub fn resolve_tag<'a>(&self, tag: &'a str) -> ResolvedType<'a> {
        if self.config.rewrite_legacy {
            self.registry.resolve(tag)
        } else {
            ResolvedType::Passthrough(tag)
        }
    }

    /// Extract the tag from `node`, resolve it, and return it together with
    /// the payload to dispatch.
    pub fn rewrite<'a>(&self, node: &'a JsonValue) -> Result<(ResolvedType<'a>, JsonValue)> {
        let tagged = split_tagged(self.family(), node, &self.config)?;
        let resolved = self.resolve_tag(tagged.tag);

        match resolved {
            ResolvedType::Legacy { legacy, canonical } => {
                debug!(family = %self.family(), legacy, canonical, "rewrote legacy type tag");
            }
            ResolvedType::Passthrough(tag) => {
                trace!(family = %self.family(), tag, "type tag passed through");
            }
        }

        Ok((resolved, tagged.payload))
    }

    /// Rewrite `node` into the current format: property layout under the
    /// configured type key, carrying the canonical identifier.
    pub fn normalize(&self, node: &JsonValue) -> Result<JsonValue> {
        let (resolved, payload) = self.rewrite(node)?;
        attach_tag(
            resolved.type_id(),
            payload,
            TagLayout::Property,
            &self.config.type_key,
        )
    }

    /// [`LegacyTagRewriter::normalize`] over a single node or an array of nodes
    pub fn normalize_all(&self, node: &JsonValue) -> Result<JsonValue> {
        match node {
            JsonValue::Array(items) => items
                .iter()
                .map(|item| self.normalize(item))
                .collect::<Result<Vec<_>>>()
                .map(JsonValue::Array),
            JsonValue::Object(_) => self.normalize(node),
            other => Err(ResolveError::InvalidPayload(format!(
                "expected a {} node or an array of them, found {}",
                self.family(),
                json_kind(other)
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rewrite_legacy_wrapper() {
        let rewriter = LegacyTagRewriter::new(Family::Condition);
        let node = json!({"NaNColumnCondition": {"columnName": "x"}});

        let (resolved, payload) = rewriter.rewrite(&node).unwrap();
        assert_eq!(
            resolved.type_id(),
            "org.datavec.api.transform.condition.column.NaNColumnCondition"
        );
        assert_eq!(payload, json!({"columnName": "x"}));
    }

    #[test]
    fn test_rewrite_disabled() {
        let config = ResolverConfig::new().rewrite_legacy(false);
        let rewriter = LegacyTagRewriter::with_config(Family::Condition, config);

        let resolved = rewriter.resolve_tag("BooleanCondition");
        assert_eq!(resolved, ResolvedType::Passthrough("BooleanCondition"));
    }

    #[test]
    fn test_normalize() {
        let rewriter = LegacyTagRewriter::new(Family::ColumnMetaData);

        let normalized = rewriter
            .normalize(&json!({"Integer": {"name": "age", "minAllowedValue": 0}}))
            .unwrap();
        assert_eq!(
            normalized,
            json!({
                "@class": "org.datavec.api.transform.metadata.IntegerMetaData",
                "name": "age",
                "minAllowedValue": 0
            })
        );

        let already = json!({"@class": "org.datavec.api.transform.metadata.TimeMetaData", "name": "t"});
        assert_eq!(rewriter.normalize(&already).unwrap(), already);
    }

    #[test]
    fn test_normalize_all() {
        let rewriter = LegacyTagRewriter::new(Family::Writable);
        let nodes = json!([{"Text": {"value": "a"}}, {"NullWritable": {}}]);

        let normalized = rewriter.normalize_all(&nodes).unwrap();
        assert_eq!(
            normalized,
            json!([
                {"@class": "org.datavec.api.writable.Text", "value": "a"},
                {"@class": "org.datavec.api.writable.NullWritable"}
            ])
        );

        assert!(matches!(
            rewriter.normalize_all(&json!(3)),
            Err(ResolveError::InvalidPayload(_))
        ));
    }
}
