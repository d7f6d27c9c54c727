use super::*;
use crate::test_fixtures::{schema, users_def};

#[test]
fn defaults_register_auto_restrictions() {
    let registry = PluginRegistry::with_defaults();

    assert_eq!(registry.len(), 1);
    assert!(
        registry
            .get(Adapter::Sql, PluginCategory::Relation, AUTO_RESTRICTIONS)
            .is_some()
    );
}

#[test]
fn enable_resolves_and_applies_the_plugin() {
    let registry = PluginRegistry::with_defaults();
    let mut def = users_def();

    def.enable(
        &registry,
        Adapter::Sql,
        PluginCategory::Relation,
        AUTO_RESTRICTIONS,
    )
    .unwrap();

    assert!(def.auto_restrictions_enabled());

    let users = def.finalize(schema(&[("email", true)])).unwrap();
    assert_eq!(users.accessor_names().collect::<Vec<_>>(), ["by_email"]);
}

#[test]
fn unknown_plugin_is_rejected() {
    let registry = PluginRegistry::with_defaults();
    let mut def = users_def();

    let err = def
        .enable(
            &registry,
            Adapter::Sql,
            PluginCategory::Relation,
            "auto_projections",
        )
        .unwrap_err();

    assert_eq!(
        err,
        Error::Plugin(PluginError::Unknown {
            adapter: Adapter::Sql,
            category: PluginCategory::Relation,
            name: "auto_projections".to_string(),
        })
    );
}

#[test]
fn registration_replaces_existing_entries() {
    fn noop(_: &mut RelationDef) -> Result<(), Error> {
        Ok(())
    }

    let registry = PluginRegistry::with_defaults().register(
        Adapter::Sql,
        PluginCategory::Relation,
        AUTO_RESTRICTIONS,
        noop,
    );

    assert_eq!(registry.len(), 1);

    let mut def = users_def();
    def.enable(
        &registry,
        Adapter::Sql,
        PluginCategory::Relation,
        AUTO_RESTRICTIONS,
    )
    .unwrap();

    // replacement plugin is a no-op
    assert!(!def.auto_restrictions_enabled());
}

#[test]
fn lookup_accepts_runtime_names() {
    let registry = PluginRegistry::with_defaults();
    let name = format!("auto_{}", "restrictions");

    assert!(
        registry
            .get(Adapter::Sql, PluginCategory::Relation, &name)
            .is_some()
    );
}

#[test]
fn keys_display_as_declarative_config_names() {
    assert_eq!(Adapter::Sql.to_string(), "sql");
    assert_eq!(PluginCategory::Relation.to_string(), "relation");
}
