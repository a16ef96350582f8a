#![allow(dead_code)]

use datavec_legacy::{
    Family, Legacy, LegacyNameRegistry, PolymorphicFamily, ResolveError, Result, SubtypeDispatch,
    SubtypeRegistry, deserialize_legacy, deserialize_legacy_option, deserialize_legacy_vec,
};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

pub const CONDITION_FILTER: &str = "org.datavec.api.transform.filter.ConditionFilter";
pub const FILTER_INVALID_VALUES: &str = "org.datavec.api.transform.filter.FilterInvalidValues";
pub const INVALID_NUM_COLUMNS: &str = "org.datavec.api.transform.filter.InvalidNumColumns";

pub const NAN_COLUMN_CONDITION: &str =
    "org.datavec.api.transform.condition.column.NaNColumnCondition";
pub const INTEGER_COLUMN_CONDITION: &str =
    "org.datavec.api.transform.condition.column.IntegerColumnCondition";
pub const BOOLEAN_CONDITION: &str = "org.datavec.api.transform.condition.BooleanCondition";

pub const CATEGORICAL_METADATA: &str = "org.datavec.api.transform.metadata.CategoricalMetaData";
pub const INTEGER_METADATA: &str = "org.datavec.api.transform.metadata.IntegerMetaData";

pub const CONVERT_TO_STRING: &str = "org.datavec.api.transform.transform.string.ConvertToString";
pub const CATEGORICAL_TO_INTEGER: &str =
    "org.datavec.api.transform.transform.categorical.CategoricalToIntegerTransform";

// ---------------------------------------------------------------------------
// Conditions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaNColumnCondition {
    pub column_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerColumnCondition {
    pub column_name: String,
    pub op: String,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanCondition {
    pub condition_type: String,
    #[serde(deserialize_with = "deserialize_legacy_vec")]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    NaN(NaNColumnCondition),
    Integer(IntegerColumnCondition),
    Boolean(BooleanCondition),
}

impl From<NaNColumnCondition> for Condition {
    fn from(value: NaNColumnCondition) -> Self {
        Condition::NaN(value)
    }
}

impl From<IntegerColumnCondition> for Condition {
    fn from(value: IntegerColumnCondition) -> Self {
        Condition::Integer(value)
    }
}

impl From<BooleanCondition> for Condition {
    fn from(value: BooleanCondition) -> Self {
        Condition::Boolean(value)
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConditionFilter {
    #[serde(deserialize_with = "deserialize_legacy")]
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterInvalidValues {
    pub columns_to_filter_if_invalid: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidNumColumns {
    #[serde(default)]
    pub input_schema: Option<JsonValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Condition(ConditionFilter),
    InvalidValues(FilterInvalidValues),
    InvalidNumColumns(InvalidNumColumns),
}

impl From<ConditionFilter> for Filter {
    fn from(value: ConditionFilter) -> Self {
        Filter::Condition(value)
    }
}

impl From<FilterInvalidValues> for Filter {
    fn from(value: FilterInvalidValues) -> Self {
        Filter::InvalidValues(value)
    }
}

impl From<InvalidNumColumns> for Filter {
    fn from(value: InvalidNumColumns) -> Self {
        Filter::InvalidNumColumns(value)
    }
}

// ---------------------------------------------------------------------------
// Column metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoricalMetaData {
    pub name: String,
    pub state_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerMetaData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_allowed_value: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_allowed_value: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnMetaData {
    Categorical(CategoricalMetaData),
    Integer(IntegerMetaData),
}

impl From<CategoricalMetaData> for ColumnMetaData {
    fn from(value: CategoricalMetaData) -> Self {
        ColumnMetaData::Categorical(value)
    }
}

impl From<IntegerMetaData> for ColumnMetaData {
    fn from(value: IntegerMetaData) -> Self {
        ColumnMetaData::Integer(value)
    }
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertToString {
    pub column_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoricalToIntegerTransform {
    pub column_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    ConvertToString(ConvertToString),
    CategoricalToInteger(CategoricalToIntegerTransform),
}

impl From<ConvertToString> for Transform {
    fn from(value: ConvertToString) -> Self {
        Transform::ConvertToString(value)
    }
}

impl From<CategoricalToIntegerTransform> for Transform {
    fn from(value: CategoricalToIntegerTransform) -> Self {
        Transform::CategoricalToInteger(value)
    }
}

/// A document mixing several families, the way a saved transform process does
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformProcess {
    #[serde(deserialize_with = "deserialize_legacy_vec")]
    pub steps: Vec<Transform>,
    #[serde(default, deserialize_with = "deserialize_legacy_option")]
    pub filter: Option<Filter>,
    #[serde(default)]
    pub column_meta_data: BTreeMap<String, Legacy<ColumnMetaData>>,
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

lazy_static! {
    static ref CONDITIONS: SubtypeRegistry<Condition> = SubtypeRegistry::<Condition>::new(Family::Condition)
        .with::<NaNColumnCondition>(NAN_COLUMN_CONDITION)
        .and_then(|r| r.with::<IntegerColumnCondition>(INTEGER_COLUMN_CONDITION))
        .and_then(|r| r.with::<BooleanCondition>(BOOLEAN_CONDITION))
        .expect("condition subtypes register once");
    static ref FILTERS: SubtypeRegistry<Filter> = SubtypeRegistry::<Filter>::new(Family::Filter)
        .with::<ConditionFilter>(CONDITION_FILTER)
        .and_then(|r| r.with::<FilterInvalidValues>(FILTER_INVALID_VALUES))
        .and_then(|r| r.with::<InvalidNumColumns>(INVALID_NUM_COLUMNS))
        .expect("filter subtypes register once");
    static ref METADATA: SubtypeRegistry<ColumnMetaData> =
        SubtypeRegistry::<ColumnMetaData>::new(Family::ColumnMetaData)
            .with::<CategoricalMetaData>(CATEGORICAL_METADATA)
            .and_then(|r| r.with::<IntegerMetaData>(INTEGER_METADATA))
            .expect("metadata subtypes register once");
    static ref TRANSFORMS: SubtypeRegistry<Transform> = SubtypeRegistry::<Transform>::new(Family::Transform)
        .with::<ConvertToString>(CONVERT_TO_STRING)
        .and_then(|r| r.with::<CategoricalToIntegerTransform>(CATEGORICAL_TO_INTEGER))
        .expect("transform subtypes register once");
}

impl PolymorphicFamily for Condition {
    fn subtypes() -> &'static SubtypeRegistry<Self> {
        &CONDITIONS
    }
}

impl PolymorphicFamily for Filter {
    fn subtypes() -> &'static SubtypeRegistry<Self> {
        &FILTERS
    }
}

impl PolymorphicFamily for ColumnMetaData {
    fn subtypes() -> &'static SubtypeRegistry<Self> {
        &METADATA
    }
}

impl PolymorphicFamily for Transform {
    fn subtypes() -> &'static SubtypeRegistry<Self> {
        &TRANSFORMS
    }
}

/// Dispatch that accepts every canonical identifier of a family and hands
/// back what it was given, so whole tables can be exercised without
/// concrete types.
pub struct EchoDispatch {
    family: Family,
    known: Vec<&'static str>,
}

impl EchoDispatch {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            known: LegacyNameRegistry::for_family(family).canonical_ids(),
        }
    }
}

impl SubtypeDispatch<(String, JsonValue)> for EchoDispatch {
    fn family(&self) -> Family {
        self.family
    }

    fn decode_subtype(&self, type_id: &str, payload: JsonValue) -> Result<(String, JsonValue)> {
        if self.known.iter().any(|known| *known == type_id) {
            Ok((type_id.to_string(), payload))
        } else {
            Err(ResolveError::UnknownType {
                family: self.family,
                type_id: type_id.to_string(),
            })
        }
    }
}
