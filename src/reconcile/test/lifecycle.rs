use super::*;

/// Walks an entity through its full lifecycle: first observation creates the
/// message, a changed observation edits it in place, and a permanent
/// disappearance deletes message and record.
#[tokio::test]
async fn create_edit_delete_lifecycle() {
    let test = record_store().await;
    let db = test.db.as_ref().unwrap();
    let chat = MockChat::new();
    let locks = EntityLocks::default();
    let reconciler = Reconciler::new(db, &chat, &locks);
    let repo = RenderedRecordRepository::new(db);

    // First tick: no stored record, war observed.
    let first = payload("**5 stars : 3 stars**");
    let action = reconciler
        .reconcile("war:#AAA", CHANNEL, Some(&first))
        .await
        .unwrap();
    assert_eq!(action, ReconcileAction::Created);

    let record = repo.get_by_entity_name("war:#AAA").await.unwrap().unwrap();
    let message_id: u64 = record.message_id.parse().unwrap();
    assert!(chat.payload_of(CHANNEL, message_id).is_some());

    // Second tick: clan scored a star, same message edited in place.
    let second = payload("**6 stars : 3 stars**");
    let action = reconciler
        .reconcile("war:#AAA", CHANNEL, Some(&second))
        .await
        .unwrap();
    assert_eq!(action, ReconcileAction::Edited);

    let updated = repo.get_by_entity_name("war:#AAA").await.unwrap().unwrap();
    assert_eq!(updated.message_id, record.message_id);
    assert_ne!(updated.last_hash, record.last_hash);
    assert_eq!(
        chat.payload_of(CHANNEL, message_id).unwrap().description,
        "**6 stars : 3 stars**"
    );
    assert_eq!(chat.message_count(), 1);

    // Third tick: war gone upstream; message and record are removed.
    let action = reconciler
        .reconcile("war:#AAA", CHANNEL, None)
        .await
        .unwrap();
    assert_eq!(action, ReconcileAction::Deleted);
    assert_eq!(chat.message_count(), 0);
    assert!(repo.get_by_entity_name("war:#AAA").await.unwrap().is_none());

    // Still absent: nothing to do.
    let action = reconciler
        .reconcile("war:#AAA", CHANNEL, None)
        .await
        .unwrap();
    assert_eq!(action, ReconcileAction::Noop);
}

/// Reconciling twice with identical observed state sends exactly one message
/// and the second call is a no-op edit-wise.
#[tokio::test]
async fn identical_state_is_idempotent() {
    let test = record_store().await;
    let db = test.db.as_ref().unwrap();
    let chat = MockChat::new();
    let locks = EntityLocks::default();
    let reconciler = Reconciler::new(db, &chat, &locks);

    let observed = payload("**5 stars : 3 stars**");

    let first = reconciler
        .reconcile("war:#AAA", CHANNEL, Some(&observed))
        .await
        .unwrap();
    let second = reconciler
        .reconcile("war:#AAA", CHANNEL, Some(&observed))
        .await
        .unwrap();

    assert_eq!(first, ReconcileAction::Created);
    assert_eq!(second, ReconcileAction::Unchanged);
    assert_eq!(chat.sends(), 1);
    assert_eq!(chat.edits(), 0);
    assert_eq!(chat.message_count(), 1);
}

/// No stored record and no observed state is a no-op with no API calls.
#[tokio::test]
async fn absent_absent_is_a_noop() {
    let test = record_store().await;
    let db = test.db.as_ref().unwrap();
    let chat = MockChat::new();
    let locks = EntityLocks::default();
    let reconciler = Reconciler::new(db, &chat, &locks);

    let action = reconciler
        .reconcile("stream:nobody", CHANNEL, None)
        .await
        .unwrap();

    assert_eq!(action, ReconcileAction::Noop);
    assert_eq!(chat.sends(), 0);
    assert_eq!(chat.message_count(), 0);
}
