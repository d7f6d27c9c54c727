#[cfg(test)]
mod tests;

use crate::{error::Error, relation::RelationDef};
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};
use thiserror::Error as ThisError;

///
/// Plugin registration
///
/// Explicit registration table keyed by adapter, category, and plugin
/// name. Built once at application setup and passed into relation
/// construction; no process-global state.
///

/// Name the auto-restrictions plugin registers under.
pub const AUTO_RESTRICTIONS: &str = "auto_restrictions";

///
/// Adapter
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Adapter {
    Sql,
}

impl Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sql => write!(f, "sql"),
        }
    }
}

///
/// PluginCategory
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum PluginCategory {
    Relation,
}

impl Display for PluginCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relation => write!(f, "relation"),
        }
    }
}

///
/// PluginError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PluginError {
    #[error("unknown plugin '{name}' for adapter '{adapter}' category '{category}'")]
    Unknown {
        adapter: Adapter,
        category: PluginCategory,
        name: String,
    },
}

/// Function-pointer contract for relation plugins.
pub type PluginFn = fn(&mut RelationDef) -> Result<(), Error>;

///
/// PluginRegistry
///

#[derive(Clone, Debug, Default)]
pub struct PluginRegistry {
    entries: BTreeMap<(Adapter, PluginCategory, String), PluginFn>,
}

impl PluginRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry preloaded with the builtin plugins.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new().register(
            Adapter::Sql,
            PluginCategory::Relation,
            AUTO_RESTRICTIONS,
            auto_restrictions,
        )
    }

    /// Register a plugin, builder-style. Re-registering a name replaces
    /// the previous entry.
    #[must_use]
    pub fn register(
        mut self,
        adapter: Adapter,
        category: PluginCategory,
        name: impl Into<String>,
        plugin: PluginFn,
    ) -> Self {
        self.entries.insert((adapter, category, name.into()), plugin);
        self
    }

    /// Linear find over a short, ordered table; no key allocation.
    #[must_use]
    pub fn get(&self, adapter: Adapter, category: PluginCategory, name: &str) -> Option<PluginFn> {
        self.entries
            .iter()
            .find(|(key, _)| key.0 == adapter && key.1 == category && key.2 == name)
            .map(|(_, plugin)| *plugin)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The auto-restrictions plugin: record accessor-generation intent on the
/// definition, applying immediately when the schema is already finalized.
fn auto_restrictions(def: &mut RelationDef) -> Result<(), Error> {
    def.with_auto_restrictions().map(|_| ())
}
