use serde::{Deserialize, Serialize};

/// Field name the current format stores the canonical identifier under
pub const DEFAULT_TYPE_KEY: &str = "@class";

/// Where a polymorphic node keeps its type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagLayout {
    /// `{"@class": "org.datavec...", ...fields}`
    Property,
    /// `{"ShortName": {...fields}}`, the layout legacy documents were written in
    WrapperObject,
    /// Property layout when the type key is present, wrapper object otherwise
    #[default]
    Auto,
}

/// Resolver configuration
///
/// Start from [`ResolverConfig::new`] and chain setters, or deserialize it;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// How the tag is laid out in incoming nodes
    pub layout: TagLayout,

    /// Field holding the tag in property layout
    pub type_key: String,

    /// When false the legacy registry is bypassed and every tag is
    /// dispatched as written
    pub rewrite_legacy: bool,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self {
            layout: TagLayout::default(),
            type_key: DEFAULT_TYPE_KEY.to_string(),
            rewrite_legacy: true,
        }
    }

    /// Set the tag layout
    pub fn layout(mut self, layout: TagLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the property-layout type key
    pub fn type_key(mut self, key: &str) -> Self {
        self.type_key = key.to_string();
        self
    }

    /// Enable or disable legacy tag rewriting
    pub fn rewrite_legacy(mut self, enabled: bool) -> Self {
        self.rewrite_legacy = enabled;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
