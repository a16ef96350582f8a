use super::family::Family;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Missing type tag for {family}: {detail}")]
    MissingTypeTag { family: Family, detail: String },

    #[error("Unknown {family} type '{type_id}'")]
    UnknownType { family: Family, type_id: String },

    #[error("Failed to decode fields of '{type_id}': {source}")]
    FieldDecodeFailure {
        type_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Subtype '{type_id}' is already registered for {family}")]
    DuplicateSubtype { family: Family, type_id: String },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Unknown family: {0}")]
    UnknownFamily(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResolveError>;

impl ResolveError {
    /// True for failures raised before dispatch, i.e. by this layer itself.
    pub fn is_missing_tag(&self) -> bool {
        matches!(self, Self::MissingTypeTag { .. })
    }

    pub fn is_unknown_type(&self) -> bool {
        matches!(self, Self::UnknownType { .. })
    }
}
