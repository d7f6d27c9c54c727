//! Core runtime for indexby: values, predicates, relations, the accessor
//! generator, plugin registration, and observability counters.
#![warn(unreachable_pub)]

pub mod accessor;
pub mod error;
pub mod obs;
pub mod plugin;
pub mod predicate;
pub mod relation;
pub mod value;

pub use error::{EmptySchemaError, Error};

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Prefix applied to every generated accessor name.
pub const ACCESSOR_PREFIX: &str = "by_";

///
/// Prelude
///
/// Domain vocabulary only. No observability internals or helpers are
/// re-exported here.
///

pub mod prelude {
    pub use crate::{
        accessor::{Accessor, AccessorCall, PendingAccessor},
        error::{EmptySchemaError, Error},
        plugin::{Adapter, PluginCategory, PluginRegistry},
        predicate::{AttributePredicates, Predicate},
        relation::{FinalizeState, Relation, RelationDef, Row},
        value::{FieldValue, Value},
    };
    pub use indexby_schema::node::{Attribute, Meta, MetaValue, Schema};
}
