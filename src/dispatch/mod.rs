//! Subtype dispatch
//!
//! The standard polymorphic decode path: given a canonical identifier and
//! the remaining fields, construct the concrete type. The resolver only
//! talks to [`SubtypeDispatch`]; [`SubtypeRegistry`] is the table-backed
//! implementation applications fill with their own types.

mod subtype_registry;

pub use subtype_registry::{DecodeFn, SubtypeRegistry};

use crate::core::{Family, Result};
use serde_json::Value as JsonValue;

/// Subtype-dispatch hook of the decode engine
pub trait SubtypeDispatch<T>: Send + Sync {
    /// Family whose subtypes this dispatcher constructs
    fn family(&self) -> Family;

    /// Construct the subtype registered under `type_id` from `payload`.
    ///
    /// Unregistered identifiers fail with `UnknownType`; payloads that do
    /// not match the subtype's fields fail with `FieldDecodeFailure`.
    fn decode_subtype(&self, type_id: &str, payload: JsonValue) -> Result<T>;
}
