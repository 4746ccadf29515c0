use super::*;

/// Tests deleting a user's usage history.
///
/// Expected: Ok with the number of deleted rows; other users keep theirs
#[tokio::test]
async fn deletes_only_that_users_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::usage::UsageFactory::new(db, 42)
        .seconds_from_now(-20)
        .build()
        .await?;
    factory::usage::UsageFactory::new(db, 42)
        .seconds_from_now(-10)
        .build()
        .await?;
    factory::usage::create_usage(db, 7, "other user").await?;

    let repo = UsageRepository::new(db);
    let deleted = repo.delete_by_user(42).await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.count_by_user(42).await?, 0);
    assert_eq!(repo.count_by_user(7).await?, 1);

    Ok(())
}
