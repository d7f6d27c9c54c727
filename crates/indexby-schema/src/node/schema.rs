use crate::{prelude::*, validate::validate_ident};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Construction-time validation failures. A schema that fails here never
/// exists, so the runtime can assume ident validity and uniqueness.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("attribute at position {position} has an empty identifier")]
    EmptyIdent { position: usize },

    #[error("attribute identifier '{ident}' exceeds {MAX_ATTRIBUTE_NAME_LEN} characters")]
    IdentTooLong { ident: String },

    #[error(
        "attribute identifier '{ident}' is invalid; expected lowercase alphanumeric/underscore starting with a letter"
    )]
    InvalidIdent { ident: String },

    #[error("duplicate attribute identifier '{ident}'")]
    DuplicateAttribute { ident: String },
}

///
/// Schema
///
/// Ordered attribute list for one relation. Attribute identifiers are
/// validated and unique by construction; declaration order is preserved
/// by every iterator.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Schema {
    attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(attributes: Vec<Attribute>) -> Result<Self, SchemaError> {
        let mut seen = BTreeSet::new();

        for (position, attr) in attributes.iter().enumerate() {
            validate_ident(&attr.ident, position)?;

            if !seen.insert(attr.ident.as_str()) {
                return Err(SchemaError::DuplicateAttribute {
                    ident: attr.ident.clone(),
                });
            }
        }

        Ok(Self { attributes })
    }

    /// Empty schema. Valid to construct; the accessor generator rejects it
    /// at generation time.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.ident == ident)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Indexed attributes in declaration order.
    pub fn indexed(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|a| a.indexed())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}
