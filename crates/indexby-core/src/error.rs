use crate::plugin::PluginError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level runtime error. Nothing here is caught internally; failures
/// propagate to whichever caller drove finalization, typically application
/// startup.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    EmptySchema(#[from] EmptySchemaError),

    #[error(transparent)]
    Plugin(#[from] PluginError),
}

///
/// EmptySchemaError
///
/// Accessor generation was attempted against a relation whose schema has
/// no attributes. A configuration mistake; fails startup rather than
/// silently producing a relation with zero accessors.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("relation '{relation}' has an empty schema; auto restrictions require at least one attribute")]
pub struct EmptySchemaError {
    pub relation: String,
}

impl EmptySchemaError {
    #[must_use]
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
        }
    }
}
