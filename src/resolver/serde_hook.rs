//! Wiring the resolver into serde
//!
//! A family opts in by implementing [`PolymorphicFamily`]. Fields typed as
//! that family then use the resolver explicitly:
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct ConditionFilter {
//!     #[serde(deserialize_with = "datavec_legacy::deserialize_legacy")]
//!     condition: Condition,
//! }
//! ```
//!
//! `Option` fields additionally need `#[serde(default)]` so a missing key
//! decodes to `None`.

use super::resolver::LegacyResolver;
use crate::dispatch::SubtypeRegistry;
use crate::document::ResolverConfig;
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde_json::Value as JsonValue;
use std::ops::Deref;

/// A polymorphic base type with a registered set of subtypes
pub trait PolymorphicFamily: Sized + 'static {
    /// Subtypes of this family, keyed by canonical identifier
    fn subtypes() -> &'static SubtypeRegistry<Self>;

    fn resolver_config() -> ResolverConfig {
        ResolverConfig::default()
    }
}

/// Resolver configured for `T`
pub fn resolver_for<T: PolymorphicFamily>() -> LegacyResolver<'static, T> {
    LegacyResolver::with_config(T::subtypes(), T::resolver_config())
}

pub fn deserialize_legacy<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: PolymorphicFamily,
{
    let node = JsonValue::deserialize(deserializer)?;
    resolver_for::<T>()
        .resolve_and_decode(&node)
        .map_err(D::Error::custom)
}

pub fn deserialize_legacy_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: PolymorphicFamily,
{
    let nodes = Vec::<JsonValue>::deserialize(deserializer)?;
    let resolver = resolver_for::<T>();
    nodes
        .iter()
        .map(|node| resolver.resolve_and_decode(node))
        .collect::<crate::core::Result<Vec<T>>>()
        .map_err(D::Error::custom)
}

pub fn deserialize_legacy_option<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: PolymorphicFamily,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(None),
        Some(node) => resolver_for::<T>()
            .resolve_and_decode(&node)
            .map(Some)
            .map_err(D::Error::custom),
    }
}

/// Newtype that deserializes its content through the legacy resolver.
/// Handy in positions `deserialize_with` cannot reach, e.g. map values.
#[derive(Debug, Clone, PartialEq)]
pub struct Legacy<T>(pub T);

impl<T> Legacy<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Legacy<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<'de, T: PolymorphicFamily> Deserialize<'de> for Legacy<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_legacy(deserializer).map(Legacy)
    }
}
