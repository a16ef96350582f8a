//! Polymorphic base abstractions
//!
//! Every polymorphic field in a serialized transform process is typed as one
//! of these families. Each family owns exactly one legacy name registry.

use super::error::ResolveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const API_NAMESPACE: &str = "org.datavec.api.";
const IMAGE_NAMESPACE: &str = "org.datavec.image.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Family {
    Transform,
    ColumnAnalysis,
    Condition,
    Filter,
    ColumnMetaData,
    Schema,
    SequenceComparator,
    SequenceSplit,
    WindowFunction,
    StringReducer,
    SortedRank,
    Writable,
    WritableComparator,
    /// Lives in the optional image extension; see [`Family::is_extension`].
    ImageTransform,
}

impl Family {
    pub const ALL: [Family; 14] = [
        Family::Transform,
        Family::ColumnAnalysis,
        Family::Condition,
        Family::Filter,
        Family::ColumnMetaData,
        Family::Schema,
        Family::SequenceComparator,
        Family::SequenceSplit,
        Family::WindowFunction,
        Family::StringReducer,
        Family::SortedRank,
        Family::Writable,
        Family::WritableComparator,
        Family::ImageTransform,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Transform => "Transform",
            Family::ColumnAnalysis => "ColumnAnalysis",
            Family::Condition => "Condition",
            Family::Filter => "Filter",
            Family::ColumnMetaData => "ColumnMetaData",
            Family::Schema => "Schema",
            Family::SequenceComparator => "SequenceComparator",
            Family::SequenceSplit => "SequenceSplit",
            Family::WindowFunction => "WindowFunction",
            Family::StringReducer => "StringReducer",
            Family::SortedRank => "SortedRank",
            Family::Writable => "Writable",
            Family::WritableComparator => "WritableComparator",
            Family::ImageTransform => "ImageTransform",
        }
    }

    /// Canonical identifier of the base abstraction itself
    pub fn base_type(self) -> &'static str {
        match self {
            Family::Transform => "org.datavec.api.transform.Transform",
            Family::ColumnAnalysis => "org.datavec.api.transform.analysis.columns.ColumnAnalysis",
            Family::Condition => "org.datavec.api.transform.condition.Condition",
            Family::Filter => "org.datavec.api.transform.filter.Filter",
            Family::ColumnMetaData => "org.datavec.api.transform.metadata.ColumnMetaData",
            Family::Schema => "org.datavec.api.transform.schema.Schema",
            Family::SequenceComparator => "org.datavec.api.transform.sequence.SequenceComparator",
            Family::SequenceSplit => "org.datavec.api.transform.sequence.SequenceSplit",
            Family::WindowFunction => "org.datavec.api.transform.sequence.window.WindowFunction",
            Family::StringReducer => "org.datavec.api.transform.stringreduce.IStringReducer",
            Family::SortedRank => "org.datavec.api.transform.rank.CalculateSortedRank",
            Family::Writable => "org.datavec.api.writable.Writable",
            Family::WritableComparator => "org.datavec.api.writable.comparator.WritableComparator",
            Family::ImageTransform => "org.datavec.image.transform.ImageTransform",
        }
    }

    /// Package prefix shared by every canonical identifier of this family
    pub fn namespace(self) -> &'static str {
        if self.is_extension() {
            IMAGE_NAMESPACE
        } else {
            API_NAMESPACE
        }
    }

    pub fn is_extension(self) -> bool {
        matches!(self, Family::ImageTransform)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = ResolveError;

    /// Accepts `ColumnMetaData`, `column-metadata`, `column_metadata`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Family::ALL
            .into_iter()
            .find(|family| family.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| ResolveError::UnknownFamily(s.to_string()))
    }
}
