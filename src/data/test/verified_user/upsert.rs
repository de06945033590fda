use super::*;

/// First verification creates the record with a clean warn counter.
///
/// Expected: Ok with warn_hours 0
#[tokio::test]
async fn creates_record_on_first_verification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VerifiedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerifiedUserRepository::new(db);
    let user = repo.upsert(upsert_param("555", "#PLAYER")).await?;

    assert_eq!(user.discord_id, "555");
    assert_eq!(user.warn_hours, 0);

    Ok(())
}

/// Re-verifying updates the stored account and resets the warn counter
/// without duplicating the row.
///
/// Expected: Ok with one refreshed record
#[tokio::test]
async fn reverification_refreshes_and_resets_warnings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VerifiedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerifiedUserRepository::new(db);

    factory::verified_user::VerifiedUserFactory::new(db)
        .discord_id("555")
        .player_tag("#OLD")
        .warn_hours(48)
        .build()
        .await?;

    let mut param = upsert_param("555", "#NEW");
    param.player_name = "Renamed".to_string();
    let user = repo.upsert(param).await?;

    assert_eq!(user.player_tag, "#NEW");
    assert_eq!(user.player_name, "Renamed");
    assert_eq!(user.warn_hours, 0);

    let count = entity::prelude::VerifiedUser::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Lookup by player tag finds the linked Discord account.
///
/// Expected: Ok(Some) with matching discord id
#[tokio::test]
async fn finds_by_player_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VerifiedUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerifiedUserRepository::new(db);
    repo.upsert(upsert_param("555", "#PLAYER")).await?;

    let user = repo.find_by_player_tag("#PLAYER").await?.unwrap();
    assert_eq!(user.discord_id, "555");
    assert!(repo.find_by_player_tag("#MISSING").await?.is_none());

    Ok(())
}
