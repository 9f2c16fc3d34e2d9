//! End-to-end compensation semantics against the in-memory directory.

use dirtx_tests::prelude::*;

struct Fixture {
    memory: std::sync::Arc<MemoryDirectory>,
    delegate: TransactionDelegate,
    ctx: TransactionContext,
}

fn begun() -> Fixture {
    let memory = MemoryDirectory::new();
    let delegate = TransactionDelegate::new(Box::new(FixedSource::new(memory.clone())));
    let mut ctx = TransactionContext::new();
    delegate.begin(&mut ctx).unwrap();
    Fixture {
        memory,
        delegate,
        ctx,
    }
}

#[test]
fn test_create_entry_rollback_leaves_entry_absent() {
    // GIVEN
    let mut f = begun();
    f.ctx
        .perform_operation(
            "bind",
            OperationArgs::Entry {
                name: dn("cn=new, ou=People"),
                payload: attributes! { "cn" => "new" },
            },
        )
        .unwrap();
    assert!(f.memory.contains(&dn("cn=new, ou=People")));

    // WHEN
    f.delegate.rollback(&mut f.ctx).unwrap();

    // THEN
    assert!(!f.memory.contains(&dn("cn=new, ou=People")));
    assert!(f.memory.is_empty());
}

#[test]
fn test_replace_entry_is_visible_during_transaction() {
    // GIVEN
    let mut f = begun();
    f.memory.seed(&dn("cn=x"), attributes! { "description" => "old" });

    // WHEN
    f.ctx
        .perform_operation(
            "rebind",
            OperationArgs::Entry {
                name: dn("cn=x"),
                payload: attributes! { "description" => "new" },
            },
        )
        .unwrap();

    // THEN: new payload bound, displaced entry parked under the temp name
    assert_eq!(
        f.memory.entry(&dn("cn=x")).unwrap(),
        attributes! { "description" => "new" }
    );
    assert_eq!(
        f.memory.entry(&dn("cn=x_temp")).unwrap(),
        attributes! { "description" => "old" }
    );
}

#[test]
fn test_replace_entry_rollback_restores_original() {
    // GIVEN
    let mut f = begun();
    f.memory.seed(&dn("cn=x"), attributes! { "description" => "old" });
    f.ctx
        .perform_operation(
            "rebind",
            OperationArgs::Entry {
                name: dn("cn=x"),
                payload: attributes! { "description" => "new" },
            },
        )
        .unwrap();

    // WHEN
    f.delegate.rollback(&mut f.ctx).unwrap();

    // THEN: original payload back at the original name, temp gone
    assert_eq!(
        f.memory.entry(&dn("cn=x")).unwrap(),
        attributes! { "description" => "old" }
    );
    assert!(!f.memory.contains(&dn("cn=x_temp")));
}

#[test]
fn test_replace_entry_commit_removes_temp() {
    // GIVEN
    let mut f = begun();
    f.memory.seed(&dn("cn=x"), attributes! { "description" => "old" });
    f.ctx
        .perform_operation(
            "rebind",
            OperationArgs::Entry {
                name: dn("cn=x"),
                payload: attributes! { "description" => "new" },
            },
        )
        .unwrap();

    // WHEN
    f.delegate.commit(&mut f.ctx).unwrap();

    // THEN
    assert_eq!(
        f.memory.entry(&dn("cn=x")).unwrap(),
        attributes! { "description" => "new" }
    );
    assert!(!f.memory.contains(&dn("cn=x_temp")));
}

#[test]
fn test_rename_entry_rollback_moves_back() {
    // GIVEN
    let mut f = begun();
    f.memory
        .seed(&dn("cn=x, ou=People"), attributes! { "cn" => "x" });
    f.ctx
        .perform_operation(
            "rename",
            OperationArgs::Rename {
                from: dn("cn=x, ou=People"),
                to: dn("cn=x, ou=Alumni"),
            },
        )
        .unwrap();
    assert!(f.memory.contains(&dn("cn=x, ou=Alumni")));

    // WHEN
    f.delegate.rollback(&mut f.ctx).unwrap();

    // THEN
    assert!(f.memory.contains(&dn("cn=x, ou=People")));
    assert!(!f.memory.contains(&dn("cn=x, ou=Alumni")));
}

#[test]
fn test_delete_entry_is_soft_until_commit() {
    // GIVEN
    let mut f = begun();
    f.memory.seed(&dn("cn=x"), attributes! { "cn" => "x" });

    // WHEN
    f.ctx
        .perform_operation("unbind", OperationArgs::Name { name: dn("cn=x") })
        .unwrap();

    // THEN: invisible under its old name, data parked under the temp name
    assert!(!f.memory.contains(&dn("cn=x")));
    assert_eq!(
        f.memory.entry(&dn("cn=x_temp")).unwrap(),
        attributes! { "cn" => "x" }
    );
}

#[test]
fn test_delete_entry_rollback_restores_data() {
    // GIVEN
    let mut f = begun();
    f.memory.seed(&dn("cn=x"), attributes! { "cn" => "x" });
    f.ctx
        .perform_operation("unbind", OperationArgs::Name { name: dn("cn=x") })
        .unwrap();

    // WHEN
    f.delegate.rollback(&mut f.ctx).unwrap();

    // THEN
    assert_eq!(f.memory.entry(&dn("cn=x")).unwrap(), attributes! { "cn" => "x" });
    assert!(!f.memory.contains(&dn("cn=x_temp")));
}

#[test]
fn test_delete_entry_commit_is_irreversible() {
    // GIVEN
    let mut f = begun();
    f.memory.seed(&dn("cn=x"), attributes! { "cn" => "x" });
    f.ctx
        .perform_operation("unbind", OperationArgs::Name { name: dn("cn=x") })
        .unwrap();

    // WHEN
    f.delegate.commit(&mut f.ctx).unwrap();

    // THEN
    assert!(f.memory.is_empty());
}

#[test]
fn test_modify_replace_rollback_restores_pre_image_verbatim() {
    // GIVEN
    let mut f = begun();
    f.memory.seed(
        &dn("cn=x"),
        attributes! { "description" => "Some description" },
    );
    f.ctx
        .perform_operation(
            "modify_attributes",
            OperationArgs::Modify {
                name: dn("cn=x"),
                changes: vec![Modification::replace(
                    "description",
                    vec!["Some other description".into()],
                )],
            },
        )
        .unwrap();
    assert_eq!(
        f.memory.entry(&dn("cn=x")).unwrap().get("description").unwrap().values(),
        &["Some other description"]
    );

    // WHEN
    f.delegate.rollback(&mut f.ctx).unwrap();

    // THEN
    assert_eq!(
        f.memory.entry(&dn("cn=x")).unwrap().get("description").unwrap().values(),
        &["Some description"]
    );
}

#[test]
fn test_modify_add_rollback_leaves_prior_values_untouched() {
    // GIVEN
    let mut f = begun();
    f.memory.seed(&dn("cn=x"), attributes! { "description" => "kept" });
    f.ctx
        .perform_operation(
            "modify_attributes",
            OperationArgs::Modify {
                name: dn("cn=x"),
                changes: vec![Modification::add(
                    "description",
                    vec!["X".into(), "Y".into()],
                )],
            },
        )
        .unwrap();
    assert_eq!(
        f.memory.entry(&dn("cn=x")).unwrap().get("description").unwrap().values(),
        &["kept", "X", "Y"]
    );

    // WHEN
    f.delegate.rollback(&mut f.ctx).unwrap();

    // THEN: exactly the added values are gone
    assert_eq!(
        f.memory.entry(&dn("cn=x")).unwrap().get("description").unwrap().values(),
        &["kept"]
    );
}

#[test]
fn test_unrecognized_operation_does_not_fail_the_transaction() {
    // GIVEN
    let mut f = begun();

    // WHEN
    f.ctx
        .perform_operation("search", OperationArgs::None)
        .unwrap();
    let report = f.delegate.rollback(&mut f.ctx).unwrap();

    // THEN
    assert!(report.is_clean());
}

#[test]
fn test_mixed_sequence_rollback_restores_initial_state() {
    // GIVEN
    let mut f = begun();
    f.memory.seed(&dn("cn=a"), attributes! { "description" => "a" });
    f.memory.seed(&dn("cn=b"), attributes! { "description" => "b" });

    f.ctx
        .perform_operation(
            "bind",
            OperationArgs::Entry {
                name: dn("cn=new"),
                payload: attributes! { "description" => "new" },
            },
        )
        .unwrap();
    f.ctx
        .perform_operation(
            "rebind",
            OperationArgs::Entry {
                name: dn("cn=a"),
                payload: attributes! { "description" => "a2" },
            },
        )
        .unwrap();
    f.ctx
        .perform_operation(
            "modify_attributes",
            OperationArgs::Modify {
                name: dn("cn=b"),
                changes: vec![Modification::replace("description", vec!["b2".into()])],
            },
        )
        .unwrap();
    f.ctx
        .perform_operation("unbind", OperationArgs::Name { name: dn("cn=b") })
        .unwrap();

    // WHEN
    let report = f.delegate.rollback(&mut f.ctx).unwrap();

    // THEN: the directory is exactly as it started
    assert!(report.is_clean());
    assert_eq!(f.memory.len(), 2);
    assert_eq!(
        f.memory.entry(&dn("cn=a")).unwrap(),
        attributes! { "description" => "a" }
    );
    assert_eq!(
        f.memory.entry(&dn("cn=b")).unwrap(),
        attributes! { "description" => "b" }
    );
}

#[test]
fn test_rollback_continues_past_a_failing_compensation() {
    // GIVEN: two creations, the first sabotaged from outside the engine
    let mut f = begun();
    f.ctx
        .perform_operation(
            "bind",
            OperationArgs::Entry {
                name: dn("cn=first"),
                payload: attributes! { "cn" => "first" },
            },
        )
        .unwrap();
    f.ctx
        .perform_operation(
            "bind",
            OperationArgs::Entry {
                name: dn("cn=second"),
                payload: attributes! { "cn" => "second" },
            },
        )
        .unwrap();
    f.memory.unbind(&dn("cn=first")).unwrap();

    // WHEN
    let report = f.delegate.rollback(&mut f.ctx).unwrap();

    // THEN: the sabotaged entry is reported, the other is still undone
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].phase, CompensationPhase::Rollback);
    assert!(!f.memory.contains(&dn("cn=second")));
}

#[test]
fn test_forward_failure_propagates_and_is_not_compensated() {
    // GIVEN: binding over an occupied name fails at the transport
    let mut f = begun();
    f.memory.seed(&dn("cn=taken"), attributes! { "cn" => "taken" });

    // WHEN
    let result = f.ctx.perform_operation(
        "bind",
        OperationArgs::Entry {
            name: dn("cn=taken"),
            payload: attributes! { "cn" => "other" },
        },
    );
    assert!(result.is_err());
    let report = f.delegate.rollback(&mut f.ctx).unwrap();

    // THEN: nothing was logged for the failed call
    assert!(report.is_clean());
    assert_eq!(
        f.memory.entry(&dn("cn=taken")).unwrap(),
        attributes! { "cn" => "taken" }
    );
}

#[test]
fn test_different_subtree_strategy_end_to_end() {
    // GIVEN
    let memory = MemoryDirectory::new();
    memory.seed(&dn("cn=x, ou=People"), attributes! { "cn" => "x" });
    let delegate = TransactionDelegate::with_renaming_strategy(
        Box::new(FixedSource::new(memory.clone())),
        std::sync::Arc::new(DifferentSubtreeTempEntryRenamingStrategy::new(dn(
            "ou=tempEntries",
        ))),
    );
    let mut ctx = TransactionContext::new();
    delegate.begin(&mut ctx).unwrap();

    // WHEN
    ctx.perform_operation(
        "unbind",
        OperationArgs::Name {
            name: dn("cn=x, ou=People"),
        },
    )
    .unwrap();

    // THEN: parked under the dedicated subtree until rollback
    assert_eq!(
        memory.entry(&dn("cn=x0, ou=tempEntries")),
        Some(attributes! { "cn" => "x" })
    );
    delegate.rollback(&mut ctx).unwrap();
    assert!(memory.contains(&dn("cn=x, ou=People")));
    assert!(!memory.contains(&dn("cn=x0, ou=tempEntries")));
}
