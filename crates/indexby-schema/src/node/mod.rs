mod attribute;
mod schema;


pub use attribute::{Attribute, Meta, MetaValue};
pub use schema::{Schema, SchemaError};

/// Metadata key that marks an attribute as backed by an index.
pub const INDEX_FLAG: &str = "index";
