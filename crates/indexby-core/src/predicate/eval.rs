use crate::{
    predicate::{CompareOp, ComparePredicate, Predicate},
    relation::Row,
    value::Value,
};

/// Evaluate a predicate against one row.
///
/// Missing attributes fail every comparison and `IsNull`; a present
/// `Value::Null` satisfies `IsNull` only. `In` is membership by equality
/// over a list value.
pub(crate) fn eval(predicate: &Predicate, row: &Row) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,
        Predicate::And(preds) => preds.iter().all(|p| eval(p, row)),
        Predicate::Or(preds) => preds.iter().any(|p| eval(p, row)),
        Predicate::Not(pred) => !eval(pred, row),
        Predicate::Compare(cmp) => eval_compare(cmp, row),
        Predicate::IsNull { attribute } => row.get(attribute).is_some_and(Value::is_null),
    }
}

fn eval_compare(cmp: &ComparePredicate, row: &Row) -> bool {
    let Some(actual) = row.get(&cmp.attribute) else {
        return false;
    };

    match cmp.op {
        CompareOp::Eq => *actual == cmp.value,
        CompareOp::Ne => *actual != cmp.value,
        CompareOp::In => match &cmp.value {
            Value::List(items) => items.contains(actual),
            _ => false,
        },
    }
}
