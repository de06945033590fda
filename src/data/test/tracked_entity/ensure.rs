use super::*;

/// `ensure` creates on first call and is a no-op afterwards, including for
/// rows that already exist in the table.
///
/// Expected: Ok(true) then Ok(false), no duplicate rows
#[tokio::test]
async fn ensure_creates_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackedEntityRepository::new(db);
    assert!(repo.ensure(FeatureKind::War, "#AAA").await?);
    assert!(!repo.ensure(FeatureKind::War, "#AAA").await?);

    // A row created outside the repository is also recognized.
    create_tracked_entity(db, "war", "#BBB").await?;
    assert!(!repo.ensure(FeatureKind::War, "#BBB").await?);

    let count = entity::prelude::TrackedEntity::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// The same name under different kinds is two distinct entities.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn same_name_under_different_kinds_is_distinct() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackedEntityRepository::new(db);
    repo.ensure(FeatureKind::War, "#AAA").await?;
    repo.ensure(FeatureKind::WarLeague, "#AAA").await?;

    assert_eq!(repo.get_by_kind(FeatureKind::War).await?.len(), 1);
    assert_eq!(repo.get_by_kind(FeatureKind::WarLeague).await?.len(), 1);

    Ok(())
}

/// Delete removes the entity and reports whether anything was there.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn delete_reports_removed_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackedEntityRepository::new(db);
    repo.ensure(FeatureKind::Stream, "somecaster").await?;

    assert_eq!(repo.delete(FeatureKind::Stream, "somecaster").await?, 1);
    assert_eq!(repo.delete(FeatureKind::Stream, "somecaster").await?, 0);
    assert!(repo.find(FeatureKind::Stream, "somecaster").await?.is_none());

    Ok(())
}

/// Streams are listed in creation order so boards are stable across ticks.
///
/// Expected: Ok with insertion order preserved
#[tokio::test]
async fn listing_preserves_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrackedEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrackedEntityRepository::new(db);
    repo.ensure(FeatureKind::Stream, "first").await?;
    repo.ensure(FeatureKind::Stream, "second").await?;
    repo.ensure(FeatureKind::Stream, "third").await?;

    let names: Vec<String> = repo
        .get_by_kind(FeatureKind::Stream)
        .await?
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);

    Ok(())
}
