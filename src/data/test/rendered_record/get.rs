use super::*;

/// Looking up an untracked entity returns None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RenderedRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RenderedRecordRepository::new(db);
    assert!(repo.get_by_entity_name("war:#NOPE").await?.is_none());

    Ok(())
}

/// A factory-created record round-trips through the repository.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RenderedRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rendered_record::RenderedRecordFactory::new(db)
        .entity_name("war:#AAA")
        .message_id("1001")
        .build()
        .await?;

    let repo = RenderedRecordRepository::new(db);
    let record = repo.get_by_entity_name("war:#AAA").await?.unwrap();
    assert_eq!(record.message_id, "1001");

    Ok(())
}
