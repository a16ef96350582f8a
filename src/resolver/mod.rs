//! Legacy-aware polymorphic resolution
//!
//! - `rewriter.rs` - tag extraction and legacy name rewriting
//! - `resolver.rs` - rewrite, then delegate to subtype dispatch
//! - `serde_hook.rs` - explicit serde wiring per family

mod resolver;
mod rewriter;
mod serde_hook;

pub use resolver::LegacyResolver;
pub use rewriter::LegacyTagRewriter;
pub use serde_hook::{
    Legacy, PolymorphicFamily, deserialize_legacy, deserialize_legacy_option,
    deserialize_legacy_vec, resolver_for,
};
