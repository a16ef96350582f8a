//! Legacy type name registries
//!
//! - `tables.rs` - verbatim tag tables for the core API families
//! - `image.rs` - tag table for the image extension family
//! - `registry.rs` - immutable per-family lookup built once on first use

mod image;
mod registry;
mod tables;

pub use registry::{LegacyNameRegistry, ResolvedType};
