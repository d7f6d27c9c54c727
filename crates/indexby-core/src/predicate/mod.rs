mod ast;
mod eval;


pub use ast::{AttributePredicates, CompareOp, ComparePredicate, Predicate};
pub(crate) use eval::eval;
