//! indexby — derive `by_<attribute>` lookup accessors from indexed schema
//! attributes.
//!
//! ## Crate layout
//! - `core`: values, predicates, relations, the accessor generator, plugin
//!   registration, and observability counters.
//! - `schema`: attribute descriptors, metadata flags, and ordered schemas.
//!
//! The `prelude` module carries the domain vocabulary used at call sites.

pub use indexby_core as core;
pub use indexby_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use indexby_core::{EmptySchemaError, Error};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        ACCESSOR_PREFIX,
        accessor::{Accessor, AccessorCall, PendingAccessor},
        error::{EmptySchemaError, Error},
        plugin::{AUTO_RESTRICTIONS, Adapter, PluginCategory, PluginRegistry},
        predicate::{AttributePredicates, Predicate},
        relation::{FinalizeState, Relation, RelationDef, Row},
        value::{FieldValue, Value},
    };
    pub use crate::schema::node::{Attribute, Meta, MetaValue, Schema, SchemaError};
}
