use super::*;

/// Tests counting usage per user.
///
/// Expected: counts only the requested user's rows
#[tokio::test]
async fn counts_rows_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for offset in 1..=3 {
        factory::usage::UsageFactory::new(db, 42)
            .seconds_from_now(-offset)
            .build()
            .await?;
    }
    factory::usage::create_usage(db, 7, "other user").await?;

    let repo = UsageRepository::new(db);

    assert_eq!(repo.count_by_user(42).await?, 3);
    assert_eq!(repo.count_by_user(7).await?, 1);
    assert_eq!(repo.count_by_user(1).await?, 0);

    Ok(())
}
