//! Document node handling
//!
//! A polymorphic value arrives as an already-parsed `serde_json::Value`.
//! This module reads its type tag according to a [`ResolverConfig`] and
//! writes tags back when encoding.
//!
//! - `config.rs` - tag layout and resolver configuration
//! - `node.rs` - tag/payload splitting and tagged encoding

mod config;
mod node;

pub use config::{DEFAULT_TYPE_KEY, ResolverConfig, TagLayout};
pub use node::{TaggedNode, encode_tagged, split_tagged};

pub(crate) use node::{attach_tag, json_kind};
