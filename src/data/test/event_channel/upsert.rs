use super::*;

/// Mapping a kind to a channel creates the row; remapping replaces it.
///
/// Expected: Ok with the latest channel id stored
#[tokio::test]
async fn upsert_replaces_channel_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventChannelRepository::new(db);

    let mapped = repo.upsert("war", "42").await?;
    assert_eq!(mapped.channel_id, "42");

    let remapped = repo.upsert("war", "43").await?;
    assert_eq!(remapped.channel_id, "43");

    let fetched = repo.get("war").await?.unwrap();
    assert_eq!(fetched.channel_id, "43");

    Ok(())
}

/// Kinds are independent mappings.
///
/// Expected: Ok with distinct channels per kind
#[tokio::test]
async fn kinds_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventChannelRepository::new(db);
    repo.upsert("war", "42").await?;
    repo.upsert("stream", "99").await?;

    assert_eq!(repo.get("war").await?.unwrap().channel_id, "42");
    assert_eq!(repo.get("stream").await?.unwrap().channel_id, "99");
    assert!(repo.get("clan-games").await?.is_none());

    Ok(())
}
