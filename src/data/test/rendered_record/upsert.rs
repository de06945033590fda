use super::*;

/// Upserting a fresh entity key creates the record.
///
/// Expected: Ok with record created
#[tokio::test]
async fn creates_record_for_new_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RenderedRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RenderedRecordRepository::new(db);
    let record = repo.upsert(upsert_param("war:#AAA", "1001")).await?;

    assert_eq!(record.entity_name, "war:#AAA");
    assert_eq!(record.message_id, "1001");
    assert_eq!(record.channel_id, "42");

    Ok(())
}

/// Upserting the same entity key again replaces the message id and hash
/// instead of creating a second row.
///
/// Expected: Ok with a single updated record
#[tokio::test]
async fn replaces_existing_record_for_same_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RenderedRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RenderedRecordRepository::new(db);
    repo.upsert(upsert_param("war:#AAA", "1001")).await?;
    let updated = repo.upsert(upsert_param("war:#AAA", "2002")).await?;

    assert_eq!(updated.message_id, "2002");
    assert_eq!(updated.last_hash, "hash-of-2002");

    let count = entity::prelude::RenderedRecord::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Upserting is idempotent: the same parameters twice leave one identical
/// record.
///
/// Expected: Ok with one record
#[tokio::test]
async fn upsert_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RenderedRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RenderedRecordRepository::new(db);
    let first = repo.upsert(upsert_param("war:#AAA", "1001")).await?;
    let second = repo.upsert(upsert_param("war:#AAA", "1001")).await?;

    assert_eq!(first.message_id, second.message_id);
    assert_eq!(first.last_hash, second.last_hash);

    let count = entity::prelude::RenderedRecord::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Different entities keep independent records.
///
/// Expected: Ok with one record per entity
#[tokio::test]
async fn distinct_entities_do_not_interfere() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RenderedRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RenderedRecordRepository::new(db);
    repo.upsert(upsert_param("war:#AAA", "1001")).await?;
    repo.upsert(upsert_param("stream:caster", "3003")).await?;

    let count = entity::prelude::RenderedRecord::find().count(db).await?;
    assert_eq!(count, 2);

    let war = repo.get_by_entity_name("war:#AAA").await?.unwrap();
    assert_eq!(war.message_id, "1001");

    Ok(())
}
