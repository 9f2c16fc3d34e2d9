//! Ordering guarantees of the operation log.
//!
//! Commit finalizes in recording order; rollback inverts in strictly
//! reverse recording order.

use dirtx_tests::prelude::*;

fn seeded_session() -> (std::sync::Arc<MemoryDirectory>, std::sync::Arc<RecordingDirectory>) {
    let memory = MemoryDirectory::new();
    for name in ["cn=a", "cn=b", "cn=c"] {
        memory.seed(&dn(name), attributes! { "cn" => name });
    }
    let recording = RecordingDirectory::new(memory.clone());
    (memory, recording)
}

fn record_three_deletes(ctx: &mut TransactionContext) {
    for name in ["cn=a", "cn=b", "cn=c"] {
        ctx.perform_operation("unbind", OperationArgs::Name { name: dn(name) })
            .unwrap();
    }
}

#[test]
fn test_commit_finalizes_in_recording_order() {
    // GIVEN
    let (_, recording) = seeded_session();
    let delegate = TransactionDelegate::new(Box::new(FixedSource::new(recording.clone())));
    let mut ctx = TransactionContext::new();
    delegate.begin(&mut ctx).unwrap();
    record_three_deletes(&mut ctx);
    recording.clear();

    // WHEN
    let report = delegate.commit(&mut ctx).unwrap();

    // THEN: hard deletes run first-recorded-first
    assert!(report.is_clean());
    assert_eq!(
        recording.calls(),
        vec![
            Call::Unbind("cn=a_temp".into()),
            Call::Unbind("cn=b_temp".into()),
            Call::Unbind("cn=c_temp".into()),
        ]
    );
}

#[test]
fn test_rollback_inverts_in_reverse_order() {
    // GIVEN
    let (memory, recording) = seeded_session();
    let delegate = TransactionDelegate::new(Box::new(FixedSource::new(recording.clone())));
    let mut ctx = TransactionContext::new();
    delegate.begin(&mut ctx).unwrap();
    record_three_deletes(&mut ctx);
    recording.clear();

    // WHEN
    let report = delegate.rollback(&mut ctx).unwrap();

    // THEN: compensations replay last-recorded-first
    assert!(report.is_clean());
    assert_eq!(
        recording.calls(),
        vec![
            Call::Rename("cn=c_temp".into(), "cn=c".into()),
            Call::Rename("cn=b_temp".into(), "cn=b".into()),
            Call::Rename("cn=a_temp".into(), "cn=a".into()),
        ]
    );
    for name in ["cn=a", "cn=b", "cn=c"] {
        assert!(memory.contains(&dn(name)));
    }
}

#[test]
fn test_every_executor_gets_exactly_one_terminal_call() {
    // GIVEN
    let (_, recording) = seeded_session();
    let delegate = TransactionDelegate::new(Box::new(FixedSource::new(recording.clone())));
    let mut ctx = TransactionContext::new();
    delegate.begin(&mut ctx).unwrap();
    record_three_deletes(&mut ctx);
    recording.clear();

    // WHEN: commit once, then attempt further terminals
    delegate.commit(&mut ctx).unwrap();
    let commit_calls = recording.calls().len();
    assert!(delegate.commit(&mut ctx).is_err());
    assert!(delegate.rollback(&mut ctx).is_err());

    // THEN: the refused calls reached no executor
    assert_eq!(recording.calls().len(), commit_calls);
}
