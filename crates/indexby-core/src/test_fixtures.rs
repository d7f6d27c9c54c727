use crate::{
    relation::{RelationDef, Row},
    value::Value,
};
use indexby_schema::node::{Attribute, Meta, Schema};

/// Build a schema from `(ident, indexed)` pairs.
pub(crate) fn schema(attrs: &[(&str, bool)]) -> Schema {
    let attrs = attrs
        .iter()
        .map(|(ident, indexed)| {
            let meta = if *indexed { Meta::indexed() } else { Meta::new() };
            Attribute::new(*ident, meta)
        })
        .collect();

    Schema::new(attrs).expect("test schema must be valid")
}

pub(crate) fn user(id: i64, email: &str) -> Row {
    [
        ("id".to_string(), Value::Int(id)),
        ("email".to_string(), Value::Text(email.to_string())),
    ]
    .into_iter()
    .collect()
}

/// Rows for the `users` relation.
pub(crate) fn user_rows() -> Vec<Row> {
    vec![
        user(1, "jane@doe.org"),
        user(2, "john@doe.org"),
        user(3, "jane@doe.org"),
    ]
}

/// A `users` definition over [`user_rows`].
pub(crate) fn users_def() -> RelationDef {
    RelationDef::new("users").rows(user_rows())
}
