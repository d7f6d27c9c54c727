//! Schema AST for indexby: attribute descriptors, metadata flags, and
//! ordered schemas. Construction validates the invariants the runtime
//! relies on; downstream consumers never re-validate.

pub mod node;
pub mod validate;

/// Maximum length for attribute schema identifiers.
pub const MAX_ATTRIBUTE_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        MAX_ATTRIBUTE_NAME_LEN,
        node::{Attribute, Meta, MetaValue, Schema, SchemaError},
    };
    pub use serde::Serialize;
}
