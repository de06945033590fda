use super::*;

/// A session is created for a message and page moves overwrite it in place.
///
/// Expected: Ok with the latest page stored
#[tokio::test]
async fn upsert_moves_the_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PageSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageSessionRepository::new(db);

    repo.upsert(session_param("9001", 0)).await?;
    let moved = repo.upsert(session_param("9001", 2)).await?;
    assert_eq!(moved.page, 2);

    let fetched = repo.get("9001").await?.unwrap();
    assert_eq!(fetched.page, 2);
    assert_eq!(fetched.kind, FeatureKind::War);

    Ok(())
}

/// The cleanup sweep removes only sessions older than the cutoff.
///
/// Expected: Ok(1) with the fresh session kept
#[tokio::test]
async fn cleanup_removes_only_stale_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PageSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageSessionRepository::new(db);
    repo.upsert(session_param("9001", 0)).await?;
    repo.upsert(session_param("9002", 1)).await?;

    // Everything is fresh: a cutoff in the past removes nothing.
    assert_eq!(repo.delete_older_than(Utc::now() - Duration::hours(1)).await?, 0);

    // A cutoff in the future removes both.
    assert_eq!(repo.delete_older_than(Utc::now() + Duration::hours(1)).await?, 2);
    assert!(repo.get("9001").await?.is_none());

    Ok(())
}
