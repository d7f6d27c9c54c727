mod def;
mod row;


pub use def::{FinalizeState, RelationDef};
pub use row::Row;

use crate::{
    accessor::{Accessor, AccessorTable},
    obs::{self, MetricsEvent},
    predicate::{Predicate, eval},
};
use indexby_schema::node::Schema;
use std::sync::Arc;

///
/// Relation
///
/// A materialized, queryable relation: finalized schema, row set, and the
/// dispatch table of generated accessors. Filtering never mutates; every
/// restriction produces a new relation over the surviving rows.
///

#[derive(Clone, Debug)]
pub struct Relation {
    name: String,
    schema: Schema,
    rows: Arc<[Row]>,
    accessors: AccessorTable,
}

impl Relation {
    pub(crate) const fn new(
        name: String,
        schema: Schema,
        rows: Arc<[Row]>,
        accessors: AccessorTable,
    ) -> Self {
        Self {
            name,
            schema,
            rows,
            accessors,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Filter rows by a predicate.
    ///
    /// Returns a new relation over the matching rows with the same schema
    /// and a regenerated accessor table. Memoized results of this relation
    /// never leak into the child.
    #[must_use]
    pub fn restrict(&self, predicate: &Predicate) -> Self {
        obs::record(&MetricsEvent::Restrict {
            relation: &self.name,
        });

        let rows: Arc<[Row]> = self
            .rows
            .iter()
            .filter(|row| eval(predicate, row))
            .cloned()
            .collect();

        Self {
            name: self.name.clone(),
            schema: self.schema.clone(),
            rows,
            accessors: self.accessors.regenerated(),
        }
    }

    /// Look up a generated accessor by its full `by_<attribute>` name.
    #[must_use]
    pub fn accessor(&self, name: &str) -> Option<Accessor<'_>> {
        self.accessors
            .get(name)
            .map(|entry| Accessor::new(self, entry))
    }

    /// Generated accessor names in schema order.
    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.accessors.names()
    }
}
