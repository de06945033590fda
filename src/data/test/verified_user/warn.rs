use super::*;

/// The warn counter can be advanced and reset.
///
/// Expected: Ok with updated counters
#[tokio::test]
async fn warn_counter_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VerifiedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerifiedUserRepository::new(db);
    repo.upsert(upsert_param("555", "#PLAYER")).await?;

    repo.set_warn_hours("555", 12).await?;
    assert_eq!(repo.find_by_discord_id("555").await?.unwrap().warn_hours, 12);

    repo.set_warn_hours("555", 0).await?;
    assert_eq!(repo.find_by_discord_id("555").await?.unwrap().warn_hours, 0);

    Ok(())
}

/// Deleting a verification record leaves other users intact.
///
/// Expected: Ok(1) with the sibling row untouched
#[tokio::test]
async fn delete_removes_only_the_named_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VerifiedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerifiedUserRepository::new(db);
    repo.upsert(upsert_param("555", "#AAA")).await?;
    repo.upsert(upsert_param("777", "#BBB")).await?;

    assert_eq!(repo.delete_by_discord_id("555").await?, 1);
    assert!(repo.find_by_discord_id("555").await?.is_none());
    assert!(repo.find_by_discord_id("777").await?.is_some());

    Ok(())
}
