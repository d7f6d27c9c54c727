#[cfg(test)]
mod tests;

use crate::{
    ACCESSOR_PREFIX,
    error::EmptySchemaError,
    obs::{self, MetricsEvent},
    predicate::Predicate,
    relation::Relation,
    value::{FieldValue, Value},
};
use indexby_schema::node::Schema;
use std::{cell::RefCell, collections::HashMap};

///
/// Accessor generation
///
/// Derives one `by_<attribute>` lookup per indexed schema attribute and
/// exposes them through a dispatch table on the relation, instead of
/// defining methods at runtime. Generation is deterministic over the
/// schema, so re-running it produces the same table.
///

/// Generate the accessor table for a relation's schema.
///
/// Fails on an empty schema; a schema with attributes but no indexed ones
/// is valid and yields an empty table. Selection preserves schema order.
pub(crate) fn generate(
    relation: &str,
    schema: &Schema,
) -> Result<AccessorTable, EmptySchemaError> {
    if schema.is_empty() {
        return Err(EmptySchemaError::new(relation));
    }

    let entries: Vec<AccessorEntry> = schema
        .indexed()
        .map(|attr| AccessorEntry::new(&attr.ident))
        .collect();

    obs::record(&MetricsEvent::AccessorsGenerated {
        relation,
        count: entries.len() as u64,
    });

    Ok(AccessorTable { entries })
}

///
/// AccessorEntry
///
/// One generated accessor: its full name, the bound attribute ident, and a
/// memo cache keyed by call argument. Cloning an entry clears the cache so
/// cached results never cross relation instances.
///

#[derive(Debug)]
pub(crate) struct AccessorEntry {
    name: String,
    attribute: String,
    cache: RefCell<HashMap<Value, Relation>>,
}

impl AccessorEntry {
    fn new(attribute: &str) -> Self {
        Self {
            name: format!("{ACCESSOR_PREFIX}{attribute}"),
            attribute: attribute.to_string(),
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl Clone for AccessorEntry {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            attribute: self.attribute.clone(),
            cache: RefCell::new(HashMap::new()),
        }
    }
}

///
/// AccessorTable
///
/// Ordered dispatch table of generated accessors. Names are unique because
/// attribute idents are; lookup is a linear find over a short list.
///

#[derive(Clone, Debug, Default)]
pub struct AccessorTable {
    entries: Vec<AccessorEntry>,
}

impl AccessorTable {
    pub(crate) fn get(&self, name: &str) -> Option<&AccessorEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Same entries with fresh memo caches.
    pub(crate) fn regenerated(&self) -> Self {
        self.clone()
    }
}

///
/// Accessor
///
/// Borrowed handle binding a relation to one generated accessor entry.
///

pub struct Accessor<'a> {
    relation: &'a Relation,
    entry: &'a AccessorEntry,
}

impl<'a> Accessor<'a> {
    pub(crate) const fn new(relation: &'a Relation, entry: &'a AccessorEntry) -> Self {
        Self { relation, entry }
    }

    /// Full accessor name, `by_<attribute>`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    /// Bound attribute ident.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.entry.attribute
    }

    /// Full application: filter the relation by `attribute == value`.
    ///
    /// Results are memoized per argument; a repeated call with an equal
    /// value reuses the cached relation.
    #[must_use]
    pub fn call(&self, value: impl FieldValue) -> Relation {
        let value = value.to_value();

        if let Some(hit) = self.entry.cache.borrow().get(&value) {
            obs::record(&MetricsEvent::MemoHit {
                relation: self.relation.name(),
            });

            return hit.clone();
        }

        obs::record(&MetricsEvent::MemoMiss {
            relation: self.relation.name(),
        });

        let predicate = Predicate::eq(self.entry.attribute.clone(), value.clone());
        let restricted = self.relation.restrict(&predicate);

        self.entry
            .cache
            .borrow_mut()
            .insert(value, restricted.clone());

        restricted
    }

    /// Partial application: invoke with zero arguments and get a callable
    /// awaiting the value.
    #[must_use]
    pub fn curry(&self) -> PendingAccessor {
        obs::record(&MetricsEvent::Curry {
            relation: self.relation.name(),
        });

        PendingAccessor {
            relation: self.relation.clone(),
            attribute: self.entry.attribute.clone(),
        }
    }

    /// Explicit call dispatch: applied when the value is supplied, pending
    /// otherwise.
    #[must_use]
    pub fn apply(&self, value: Option<Value>) -> AccessorCall {
        match value {
            Some(value) => AccessorCall::Applied(self.call(value)),
            None => AccessorCall::Pending(self.curry()),
        }
    }
}

///
/// AccessorCall
///
/// Result of an accessor invocation: either a filtered relation or a
/// partially-applied callable, depending on whether the call site supplied
/// the value.
///

#[derive(Clone, Debug)]
pub enum AccessorCall {
    Applied(Relation),
    Pending(PendingAccessor),
}

///
/// PendingAccessor
///
/// A curried accessor holding the relation and the bound attribute,
/// awaiting its value.
///

#[derive(Clone, Debug)]
pub struct PendingAccessor {
    relation: Relation,
    attribute: String,
}

impl PendingAccessor {
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Supply the value and produce the filtered relation. Equivalent to
    /// calling the accessor with the value directly, including memo cache
    /// consultation and hit/miss accounting.
    #[must_use]
    pub fn supply(self, value: impl FieldValue) -> Relation {
        let name = format!("{ACCESSOR_PREFIX}{}", self.attribute);

        if let Some(accessor) = self.relation.accessor(&name) {
            return accessor.call(value);
        }

        // entry gone from the table (never the case for handles produced
        // by `curry`); fall back to a plain restriction
        let predicate = Predicate::eq(self.attribute, value.to_value());

        self.relation.restrict(&predicate)
    }
}
