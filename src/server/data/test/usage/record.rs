use super::*;

/// Tests recording a usage row.
///
/// Expected: Ok with the action and a timestamp of now
#[tokio::test]
async fn records_usage() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let before = Utc::now();

    let repo = UsageRepository::new(db);
    let record = repo.record(42, "Execute command: say hi").await?;

    assert_eq!(record.user_id, 42);
    assert_eq!(record.action, "Execute command: say hi");
    assert!(record.created_at >= before);
    assert_eq!(repo.count_by_user(42).await?, 1);

    Ok(())
}

/// Tests recording two actions back to back for the same user.
///
/// Expected: both rows stored despite sharing a user ID
#[tokio::test]
async fn records_consecutive_actions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UsageRepository::new(db);
    repo.record(42, "Generate key").await?;
    repo.record(42, "Execute command: say hi").await?;

    assert_eq!(repo.count_by_user(42).await?, 2);

    Ok(())
}
