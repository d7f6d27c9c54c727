use crate::{node::INDEX_FLAG, prelude::*};
use derive_more::Deref;
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

///
/// MetaValue
///
/// Boolean-ish metadata carried by an attribute. Flags arrive from the
/// host schema system in several shapes; truthiness is what matters.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum MetaValue {
    Bool(bool),
    Nat(u64),
    Text(String),
}

impl MetaValue {
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Nat(n) => *n != 0,
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nat(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u64> for MetaValue {
    fn from(n: u64) -> Self {
        Self::Nat(n)
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

///
/// Meta
///
/// Flag map carried by an attribute, keyed by flag name.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq, Serialize)]
pub struct Meta(BTreeMap<String, MetaValue>);

impl Meta {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Shorthand for metadata carrying only a truthy `index` flag.
    #[must_use]
    pub fn indexed() -> Self {
        Self::new().flag(INDEX_FLAG, true)
    }

    /// Set a flag, builder-style.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Whether the given flag is present and truthy.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(MetaValue::is_truthy)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

///
/// Attribute
///
/// One schema attribute descriptor. Immutable once constructed; owned by
/// the schema.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Attribute {
    pub ident: String,

    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl Attribute {
    #[must_use]
    pub fn new(ident: impl Into<String>, meta: Meta) -> Self {
        Self {
            ident: ident.into(),
            meta,
        }
    }

    /// Whether the `index` metadata flag is truthy.
    #[must_use]
    pub fn indexed(&self) -> bool {
        self.meta.is_set(INDEX_FLAG)
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.indexed() {
            write!(f, "{} (indexed)", self.ident)
        } else {
            write!(f, "{}", self.ident)
        }
    }
}
