use super::*;
use crate::{
    error::Error,
    obs,
    predicate::AttributePredicates,
    relation::{FinalizeState, RelationDef, Row},
    test_fixtures::{schema, user, users_def},
};
use indexby_schema::node::{Attribute, Meta};
use proptest::prelude::*;

fn finalized_users() -> Relation {
    let mut def = users_def();
    def.with_auto_restrictions().unwrap();

    def.finalize(schema(&[("id", false), ("email", true)]))
        .unwrap()
}

#[test]
fn empty_schema_fails_and_attaches_nothing() {
    let mut def = users_def();
    def.with_auto_restrictions().unwrap();

    let err = def.finalize(Schema::empty()).unwrap_err();

    assert_eq!(
        err,
        Error::EmptySchema(EmptySchemaError::new("users")),
        "error must carry the relation identity"
    );
    assert_eq!(def.accessor_names().count(), 0);
    assert_eq!(def.state(), FinalizeState::Pending);
}

#[test]
fn only_indexed_attributes_generate_accessors() {
    let users = finalized_users();

    let names: Vec<_> = users.accessor_names().collect();
    assert_eq!(names, ["by_email"]);
    assert!(users.accessor("by_id").is_none());
}

#[test]
fn accessor_call_equals_direct_restrict() {
    let users = finalized_users();

    let via_accessor = users.accessor("by_email").unwrap().call("jane@doe.org");
    let via_restrict = users.restrict(&Predicate::eq(
        "email",
        Value::Text("jane@doe.org".to_string()),
    ));

    assert_eq!(via_accessor.rows(), via_restrict.rows());
    assert_eq!(via_accessor.len(), 2);

    // the original relation is untouched
    assert_eq!(users.len(), 3);
}

#[test]
fn attribute_is_predicate_matches_accessor_semantics() {
    let users = finalized_users();
    let email = Attribute::new("email", Meta::indexed());

    let via_is = users.restrict(&email.is("john@doe.org"));
    let via_accessor = users.accessor("by_email").unwrap().call("john@doe.org");

    assert_eq!(via_is.rows(), via_accessor.rows());
}

#[test]
fn curry_law_holds() {
    let users = finalized_users();
    let accessor = users.accessor("by_email").unwrap();

    let direct = accessor.call("jane@doe.org");

    let AccessorCall::Pending(pending) = accessor.apply(None) else {
        panic!("zero-argument apply must return a pending call");
    };
    assert_eq!(pending.attribute(), "email");

    let curried = pending.supply("jane@doe.org");
    assert_eq!(curried.rows(), direct.rows());

    let AccessorCall::Applied(applied) =
        accessor.apply(Some(Value::Text("jane@doe.org".to_string())))
    else {
        panic!("full apply must execute");
    };
    assert_eq!(applied.rows(), direct.rows());
}

#[test]
fn repeated_calls_reuse_memoized_results() {
    obs::metrics_reset_all();

    let users = finalized_users();
    let accessor = users.accessor("by_email").unwrap();

    let first = accessor.call("jane@doe.org");
    let second = accessor.call("jane@doe.org");
    let other = accessor.call("john@doe.org");

    assert_eq!(first.rows(), second.rows());
    assert_eq!(other.len(), 1);

    let report = obs::metrics_report();
    assert_eq!(report.ops.memo_hits, 1);
    assert_eq!(report.ops.memo_misses, 2);
}

#[test]
fn curried_applications_consult_the_memo_cache() {
    obs::metrics_reset_all();

    let users = finalized_users();
    let accessor = users.accessor("by_email").unwrap();

    let jane = accessor.curry().supply("jane@doe.org");
    assert_eq!(jane.len(), 2);

    let report = obs::metrics_report();
    assert_eq!(report.ops.partial_applications, 1);
    assert_eq!(report.ops.memo_misses, 1, "curried path records its miss");
}

#[test]
fn restricted_relations_get_fresh_caches() {
    let users = finalized_users();

    // warm the parent cache
    let jane = users.accessor("by_email").unwrap().call("jane@doe.org");

    // the child relation regenerates its accessors over its own rows
    let names: Vec<_> = jane.accessor_names().collect();
    assert_eq!(names, ["by_email"]);

    let nested = jane.accessor("by_email").unwrap().call("john@doe.org");
    assert!(nested.is_empty());
}

#[test]
fn refinalization_regenerates_identical_accessors() {
    let mut def = users_def();
    def.with_auto_restrictions().unwrap();

    let users_schema = schema(&[("id", false), ("email", true)]);
    let first = def.finalize(users_schema.clone()).unwrap();
    let second = def.finalize(users_schema).unwrap();

    let first_names: Vec<_> = first.accessor_names().collect();
    let second_names: Vec<_> = second.accessor_names().collect();
    assert_eq!(first_names, second_names);

    let a = first.accessor("by_email").unwrap().call("jane@doe.org");
    let b = second.accessor("by_email").unwrap().call("jane@doe.org");
    assert_eq!(a.rows(), b.rows());
}

#[test]
fn refinalization_follows_schema_reload() {
    let mut def = users_def();
    def.with_auto_restrictions().unwrap();

    let first = def
        .finalize(schema(&[("id", false), ("email", true)]))
        .unwrap();
    assert_eq!(first.accessor_names().collect::<Vec<_>>(), ["by_email"]);

    // reload drops the index flag from email and adds one on id
    let second = def
        .finalize(schema(&[("id", true), ("email", false)]))
        .unwrap();
    assert_eq!(second.accessor_names().collect::<Vec<_>>(), ["by_id"]);
}

#[test]
fn unindexed_schema_yields_empty_table() {
    let mut def = users_def();
    def.with_auto_restrictions().unwrap();

    let users = def
        .finalize(schema(&[("id", false), ("email", false)]))
        .unwrap();

    assert_eq!(users.accessor_names().count(), 0);
}

#[test]
fn two_indexed_attributes_both_work() {
    let mut def = RelationDef::new("pairs").rows([
        Row::from_pairs([("a", 1i64), ("b", 2i64)]),
        Row::from_pairs([("a", 1i64), ("b", 3i64)]),
    ]);
    def.with_auto_restrictions().unwrap();

    let pairs = def.finalize(schema(&[("a", true), ("b", true)])).unwrap();

    let names: Vec<_> = pairs.accessor_names().collect();
    assert_eq!(names, ["by_a", "by_b"]);

    assert_eq!(pairs.accessor("by_a").unwrap().call(1i64).len(), 2);
    assert_eq!(pairs.accessor("by_b").unwrap().call(3i64).len(), 1);
}

#[test]
fn generated_names_preserve_schema_order() {
    let mut def = RelationDef::new("ordered");
    def.with_auto_restrictions().unwrap();

    let rel = def
        .finalize(schema(&[
            ("zeta", true),
            ("alpha", false),
            ("mid", true),
            ("last", true),
        ]))
        .unwrap();

    let names: Vec<_> = rel.accessor_names().collect();
    assert_eq!(names, ["by_zeta", "by_mid", "by_last"]);
}

#[test]
fn scenario_email_lookup() {
    let mut def = RelationDef::new("users").rows([user(1, "jane@doe.org"), user(2, "x@y.z")]);
    def.with_auto_restrictions().unwrap();

    let users = def
        .finalize(schema(&[("id", false), ("email", true)]))
        .unwrap();

    assert_eq!(users.accessor_names().collect::<Vec<_>>(), ["by_email"]);

    let jane = users.accessor("by_email").unwrap().call("jane@doe.org");
    assert_eq!(jane.len(), 1);
    assert_eq!(
        jane.rows()[0].get("id"),
        Some(&Value::Int(1)),
        "lookup must select the matching row"
    );
}

proptest! {
    /// The generated name set is exactly `by_<ident>` for indexed
    /// attributes, independent of flag layout.
    #[test]
    fn generated_name_set_matches_indexed_attributes(flags in prop::collection::vec(any::<bool>(), 1..8)) {
        let idents: Vec<String> = (0..flags.len()).map(|i| format!("attr{i}")).collect();
        let attrs: Vec<(&str, bool)> = idents
            .iter()
            .map(String::as_str)
            .zip(flags.iter().copied())
            .collect();

        let mut def = RelationDef::new("prop");
        def.with_auto_restrictions().unwrap();
        let rel = def.finalize(schema(&attrs)).unwrap();

        let expected: Vec<String> = attrs
            .iter()
            .filter(|(_, indexed)| *indexed)
            .map(|(ident, _)| format!("by_{ident}"))
            .collect();
        let actual: Vec<String> = rel.accessor_names().map(str::to_string).collect();

        prop_assert_eq!(actual, expected);
    }
}
