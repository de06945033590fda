use super::*;

/// Deleting removes exactly the named entity's record.
///
/// Expected: Ok(1), other records untouched
#[tokio::test]
async fn deletes_only_the_named_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RenderedRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RenderedRecordRepository::new(db);
    repo.upsert(upsert_param("war:#AAA", "1001")).await?;
    repo.upsert(upsert_param("war:#BBB", "2002")).await?;

    let deleted = repo.delete_by_entity_name("war:#AAA").await?;
    assert_eq!(deleted, 1);

    assert!(repo.get_by_entity_name("war:#AAA").await?.is_none());
    assert!(repo.get_by_entity_name("war:#BBB").await?.is_some());

    Ok(())
}

/// Deleting a missing record is a harmless no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_record_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RenderedRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RenderedRecordRepository::new(db);
    assert_eq!(repo.delete_by_entity_name("war:#AAA").await?, 0);

    Ok(())
}
