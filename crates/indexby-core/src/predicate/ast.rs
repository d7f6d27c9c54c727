use crate::value::{FieldValue, Value};
use indexby_schema::node::Attribute;
use std::ops::{BitAnd, BitOr};

///
/// Predicate AST
///
/// Pure representation of row filters. This layer carries no schema
/// knowledge or execution semantics; evaluation lives in `eval`.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    In,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparePredicate {
    pub attribute: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    fn new(attribute: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            attribute: attribute.into(),
            op,
            value,
        }
    }

    #[must_use]
    pub fn eq(attribute: impl Into<String>, value: Value) -> Self {
        Self::new(attribute, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn ne(attribute: impl Into<String>, value: Value) -> Self {
        Self::new(attribute, CompareOp::Ne, value)
    }

    #[must_use]
    pub fn in_(attribute: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(attribute, CompareOp::In, Value::List(values))
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    IsNull { attribute: String },
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn eq(attribute: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::eq(attribute, value))
    }

    #[must_use]
    pub fn ne(attribute: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::ne(attribute, value))
    }

    #[must_use]
    pub fn in_(attribute: impl Into<String>, values: Vec<Value>) -> Self {
        Self::Compare(ComparePredicate::in_(attribute, values))
    }

    #[must_use]
    pub fn is_null(attribute: impl Into<String>) -> Self {
        Self::IsNull {
            attribute: attribute.into(),
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

///
/// AttributePredicates
///
/// Predicate constructors hung off schema attributes, so call sites can
/// write `attr.is(value)` instead of spelling the attribute ident twice.
///

pub trait AttributePredicates {
    /// Equality predicate binding this attribute to a value.
    fn is(&self, value: impl FieldValue) -> Predicate;
}

impl AttributePredicates for Attribute {
    fn is(&self, value: impl FieldValue) -> Predicate {
        Predicate::eq(self.ident.clone(), value.to_value())
    }
}
