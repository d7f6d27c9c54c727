use crate::{
    accessor::{self, AccessorTable},
    error::Error,
    obs::{self, MetricsEvent},
    plugin::{Adapter, PluginCategory, PluginError, PluginRegistry},
    relation::{Relation, Row},
};
use indexby_schema::node::Schema;
use std::sync::Arc;

///
/// FinalizeState
///
/// Two-state trigger protocol for accessor generation. `Pending` until the
/// first successful finalization; `Active` forever after. There is no
/// terminal state: every re-finalization re-enters generation.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FinalizeState {
    #[default]
    Pending,
    Active,
}

///
/// RelationDef
///
/// The relation "type": rows and recorded plugin intent, with the schema
/// absent until finalization. `finalize` performs generation
/// deterministically and materializes a [`Relation`]; calling it again
/// (schema reload) regenerates from the new schema.
///
/// Single-threaded by design: definitions are built and finalized on one
/// initialization thread before any query traffic. No locking is provided;
/// a concurrent host must serialize finalization itself.
///

#[derive(Clone, Debug)]
pub struct RelationDef {
    name: String,
    rows: Vec<Row>,
    schema: Option<Schema>,
    auto_restrict: bool,
    state: FinalizeState,
    accessors: AccessorTable,
}

impl RelationDef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            schema: None,
            auto_restrict: false,
            state: FinalizeState::Pending,
            accessors: AccessorTable::default(),
        }
    }

    /// Seed the definition with rows, builder-style.
    #[must_use]
    pub fn rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = Row>,
    {
        self.rows = rows.into_iter().collect();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn state(&self) -> FinalizeState {
        self.state
    }

    #[must_use]
    pub const fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    #[must_use]
    pub const fn auto_restrictions_enabled(&self) -> bool {
        self.auto_restrict
    }

    /// Generated accessor names currently cached on the definition.
    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.accessors.names()
    }

    /// Record the intent to generate `by_<attribute>` accessors.
    ///
    /// If the schema is already finalized, generation runs immediately (the
    /// zero-duration pending path), so an empty schema fails here rather
    /// than at the next finalization.
    pub fn with_auto_restrictions(&mut self) -> Result<&mut Self, Error> {
        self.auto_restrict = true;

        if let Some(schema) = &self.schema {
            self.accessors = accessor::generate(&self.name, schema)?;
        }

        Ok(self)
    }

    /// Resolve a plugin from the registry and apply it to this definition.
    pub fn enable(
        &mut self,
        registry: &PluginRegistry,
        adapter: Adapter,
        category: PluginCategory,
        name: &str,
    ) -> Result<&mut Self, Error> {
        let plugin = registry
            .get(adapter, category, name)
            .ok_or_else(|| PluginError::Unknown {
                adapter,
                category,
                name: name.to_string(),
            })?;

        plugin(self)?;

        Ok(self)
    }

    /// Finalize the schema and materialize a relation.
    ///
    /// Transitions `Pending` to `Active` on first success and re-runs
    /// accessor generation on every call. On failure nothing is attached
    /// and the state is left untouched.
    pub fn finalize(&mut self, schema: Schema) -> Result<Relation, Error> {
        let accessors = if self.auto_restrict {
            accessor::generate(&self.name, &schema)?
        } else {
            AccessorTable::default()
        };

        obs::record(&MetricsEvent::Finalize {
            relation: &self.name,
        });

        self.schema = Some(schema.clone());
        self.accessors = accessors;
        self.state = FinalizeState::Active;

        let rows: Arc<[Row]> = Arc::from(self.rows.clone());

        Ok(Relation::new(
            self.name.clone(),
            schema,
            rows,
            self.accessors.regenerated(),
        ))
    }
}
