use super::rewriter::LegacyTagRewriter;
use crate::core::{Family, ResolveError, Result};
use crate::dispatch::SubtypeDispatch;
use crate::document::{ResolverConfig, json_kind};
use crate::legacy::ResolvedType;
use serde_json::Value as JsonValue;

/// Legacy-aware polymorphic resolver for one family
///
/// Rewrites the node's tag through the family's legacy registry, then
/// hands the result to the dispatch hook. Errors from dispatch are returned
/// as-is; the only error this layer adds is `MissingTypeTag`.
pub struct LegacyResolver<'d, T> {
    rewriter: LegacyTagRewriter,
    dispatch: &'d dyn SubtypeDispatch<T>,
}

impl<'d, T> LegacyResolver<'d, T> {
    pub fn new(dispatch: &'d dyn SubtypeDispatch<T>) -> Self {
        Self::with_config(dispatch, ResolverConfig::default())
    }

    pub fn with_config(dispatch: &'d dyn SubtypeDispatch<T>, config: ResolverConfig) -> Self {
        Self {
            rewriter: LegacyTagRewriter::with_config(dispatch.family(), config),
            dispatch,
        }
    }

    pub fn family(&self) -> Family {
        self.rewriter.family()
    }

    pub fn rewriter(&self) -> &LegacyTagRewriter {
        &self.rewriter
    }

    pub fn resolve_tag<'a>(&self, tag: &'a str) -> ResolvedType<'a> {
        self.rewriter.resolve_tag(tag)
    }

    pub fn resolve_and_decode(&self, node: &JsonValue) -> Result<T> {
        let (resolved, payload) = self.rewriter.rewrite(node)?;
        self.dispatch.decode_subtype(resolved.type_id(), payload)
    }

    /// Decode every element of a JSON array; the first failure aborts
    pub fn resolve_and_decode_all(&self, node: &JsonValue) -> Result<Vec<T>> {
        match node {
            JsonValue::Array(items) => items
                .iter()
                .map(|item| self.resolve_and_decode(item))
                .collect(),
            other => Err(ResolveError::InvalidPayload(format!(
                "expected an array of {} nodes, found {}",
                self.family(),
                json_kind(other)
            ))),
        }
    }
}
