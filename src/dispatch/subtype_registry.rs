use super::SubtypeDispatch;
use crate::core::{Family, ResolveError, Result};
use crate::legacy::LegacyNameRegistry;
use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Constructor for one concrete subtype
pub type DecodeFn<T> = fn(JsonValue) -> serde_json::Result<T>;

fn decode_as<S, T>(payload: JsonValue) -> serde_json::Result<T>
where
    S: DeserializeOwned + Into<T>,
{
    serde_json::from_value::<S>(payload).map(Into::into)
}

/// Canonical identifier -> constructor table for one family
///
/// Holds only function pointers, so a populated registry can be kept in a
/// `lazy_static` and shared between threads.
pub struct SubtypeRegistry<T> {
    family: Family,
    decoders: HashMap<String, DecodeFn<T>>,
}

impl<T> SubtypeRegistry<T> {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            decoders: HashMap::new(),
        }
    }

    /// Register `S` under `type_id`; decoded values are converted with `Into<T>`
    pub fn register<S>(&mut self, type_id: impl Into<String>) -> Result<()>
    where
        S: DeserializeOwned + Into<T>,
    {
        self.register_fn(type_id, decode_as::<S, T>)
    }

    /// Register a hand-written constructor
    pub fn register_fn(&mut self, type_id: impl Into<String>, decode: DecodeFn<T>) -> Result<()> {
        match self.decoders.entry(type_id.into()) {
            Entry::Occupied(existing) => Err(ResolveError::DuplicateSubtype {
                family: self.family,
                type_id: existing.key().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(decode);
                Ok(())
            }
        }
    }

    /// Builder form of [`SubtypeRegistry::register`]
    pub fn with<S>(mut self, type_id: impl Into<String>) -> Result<Self>
    where
        S: DeserializeOwned + Into<T>,
    {
        self.register::<S>(type_id)?;
        Ok(self)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.decoders.contains_key(type_id)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Registered identifiers, sorted
    pub fn type_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Canonical identifiers named by this family's legacy table that have no
    /// constructor here. Documents using those legacy tags would fail with
    /// `UnknownType`.
    pub fn missing_legacy_targets(&self) -> Vec<&'static str> {
        let missing: Vec<&'static str> = LegacyNameRegistry::for_family(self.family)
            .canonical_ids()
            .into_iter()
            .filter(|id| !self.contains(id))
            .collect();

        if !missing.is_empty() {
            warn!(
                "{} legacy {} targets have no registered subtype",
                missing.len(),
                self.family
            );
        }
        missing
    }
}

impl<T> SubtypeDispatch<T> for SubtypeRegistry<T> {
    fn family(&self) -> Family {
        self.family
    }

    fn decode_subtype(&self, type_id: &str, payload: JsonValue) -> Result<T> {
        let decode = self
            .decoders
            .get(type_id)
            .ok_or_else(|| ResolveError::UnknownType {
                family: self.family,
                type_id: type_id.to_string(),
            })?;

        decode(payload).map_err(|source| ResolveError::FieldDecodeFailure {
            type_id: type_id.to_string(),
            source,
        })
    }
}

impl<T> fmt::Debug for SubtypeRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubtypeRegistry")
            .field("family", &self.family)
            .field("type_ids", &self.type_ids())
            .finish()
    }
}
