use super::*;

/// Tests listing a user's usage.
///
/// Verifies that rows come back oldest first and that other users' rows are excluded.
///
/// Expected: Ok with the user's two actions in chronological order
#[tokio::test]
async fn lists_usage_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::usage::UsageFactory::new(db, 42)
        .action("second")
        .seconds_from_now(-10)
        .build()
        .await?;
    factory::usage::UsageFactory::new(db, 42)
        .action("first")
        .seconds_from_now(-60)
        .build()
        .await?;
    factory::usage::create_usage(db, 7, "other user").await?;

    let repo = UsageRepository::new(db);
    let actions: Vec<String> = repo
        .get_by_user(42)
        .await?
        .into_iter()
        .map(|r| r.action)
        .collect();

    assert_eq!(actions, vec!["first".to_string(), "second".to_string()]);

    Ok(())
}

/// Tests listing usage for a user with none.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UsageRepository::new(db);

    assert!(repo.get_by_user(42).await?.is_empty());

    Ok(())
}
