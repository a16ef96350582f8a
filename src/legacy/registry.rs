use super::image;
use super::tables::{self, LegacyTable};
use crate::core::Family;
use lazy_static::lazy_static;
use log::debug;
use std::collections::HashMap;

/// Outcome of looking a tag up in a legacy name registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedType<'a> {
    /// The tag was a legacy short name and has been rewritten
    Legacy {
        legacy: &'a str,
        canonical: &'static str,
    },
    /// Already canonical or unknown to the registry; left untouched
    Passthrough(&'a str),
}

impl<'a> ResolvedType<'a> {
    /// Identifier to hand to subtype dispatch
    pub fn type_id(&self) -> &'a str {
        match *self {
            ResolvedType::Legacy { canonical, .. } => canonical,
            ResolvedType::Passthrough(tag) => tag,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, ResolvedType::Legacy { .. })
    }
}

/// Immutable legacy tag -> canonical identifier mapping for one family
///
/// Instances are only reachable through [`LegacyNameRegistry::for_family`],
/// which hands out `&'static` references to lazily built tables.
#[derive(Debug)]
pub struct LegacyNameRegistry {
    family: Family,
    names: HashMap<&'static str, &'static str>,
}

macro_rules! family_registries {
    ($($family:ident => $registry:ident: $table:path),* $(,)?) => {
        lazy_static! {
            $(
                static ref $registry: LegacyNameRegistry =
                    LegacyNameRegistry::from_table(Family::$family, $table);
            )*
        }

        impl LegacyNameRegistry {
            /// The registry owned by `family`
            pub fn for_family(family: Family) -> &'static LegacyNameRegistry {
                match family {
                    $(Family::$family => &*$registry,)*
                }
            }
        }
    };
}

family_registries! {
    Transform => TRANSFORM_REGISTRY: tables::TRANSFORM,
    ColumnAnalysis => COLUMN_ANALYSIS_REGISTRY: tables::COLUMN_ANALYSIS,
    Condition => CONDITION_REGISTRY: tables::CONDITION,
    Filter => FILTER_REGISTRY: tables::FILTER,
    ColumnMetaData => COLUMN_METADATA_REGISTRY: tables::COLUMN_METADATA,
    Schema => SCHEMA_REGISTRY: tables::SCHEMA,
    SequenceComparator => SEQUENCE_COMPARATOR_REGISTRY: tables::SEQUENCE_COMPARATOR,
    SequenceSplit => SEQUENCE_SPLIT_REGISTRY: tables::SEQUENCE_SPLIT,
    WindowFunction => WINDOW_FUNCTION_REGISTRY: tables::WINDOW_FUNCTION,
    StringReducer => STRING_REDUCER_REGISTRY: tables::STRING_REDUCER,
    SortedRank => SORTED_RANK_REGISTRY: tables::SORTED_RANK,
    Writable => WRITABLE_REGISTRY: tables::WRITABLE,
    WritableComparator => WRITABLE_COMPARATOR_REGISTRY: tables::WRITABLE_COMPARATOR,
    ImageTransform => IMAGE_TRANSFORM_REGISTRY: image::IMAGE_TRANSFORM,
}

impl LegacyNameRegistry {
    fn from_table(family: Family, table: LegacyTable) -> Self {
        let names: HashMap<&'static str, &'static str> = table.iter().copied().collect();
        debug!(
            "Built legacy name registry for {} ({} entries)",
            family,
            names.len()
        );
        Self { family, names }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Exact, case-sensitive lookup. `None` is the normal answer for
    /// documents that already carry canonical identifiers.
    pub fn lookup(&self, tag: &str) -> Option<&'static str> {
        self.names.get(tag).copied()
    }

    pub fn resolve<'a>(&self, tag: &'a str) -> ResolvedType<'a> {
        match self.lookup(tag) {
            Some(canonical) => ResolvedType::Legacy {
                legacy: tag,
                canonical,
            },
            None => ResolvedType::Passthrough(tag),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.names.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All `(legacy, canonical)` pairs, sorted by legacy tag
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self.names.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable();
        entries
    }

    /// Distinct canonical identifiers this registry can produce, sorted
    pub fn canonical_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.names.values().copied().collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
