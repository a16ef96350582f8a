// ============================================================================
// datavec-legacy
// ============================================================================
//! Legacy type-tag resolution for polymorphic DataVec documents.
//!
//! Older documents tag polymorphic values with bare short names
//! (`"InvalidNumCols"`), current ones with canonical identifiers
//! (`"org.datavec.api.transform.filter.InvalidNumColumns"`). The resolver
//! rewrites the former into the latter and delegates construction to the
//! family's subtype dispatch.
//!
//! ```
//! use datavec_legacy::{Family, LegacyNameRegistry};
//!
//! let filters = LegacyNameRegistry::for_family(Family::Filter);
//! assert_eq!(
//!     filters.lookup("InvalidNumCols"),
//!     Some("org.datavec.api.transform.filter.InvalidNumColumns")
//! );
//! ```

pub mod core;
pub mod dispatch;
pub mod document;
pub mod legacy;
pub mod resolver;

// Re-export main types for convenience
pub use crate::core::{Family, ResolveError, Result};
pub use crate::dispatch::{DecodeFn, SubtypeDispatch, SubtypeRegistry};
pub use crate::document::{
    DEFAULT_TYPE_KEY, ResolverConfig, TagLayout, TaggedNode, encode_tagged, split_tagged,
};
pub use crate::legacy::{LegacyNameRegistry, ResolvedType};
pub use crate::resolver::{
    Legacy, LegacyResolver, LegacyTagRewriter, PolymorphicFamily, deserialize_legacy,
    deserialize_legacy_option, deserialize_legacy_vec, resolver_for,
};
