use super::*;

/// Tests finding an existing credential.
///
/// Expected: Ok(Some) with the stored Steam ID
#[tokio::test]
async fn finds_existing_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::credential::CredentialFactory::new(db)
        .user_id(7)
        .steam_id("76561197960287930")
        .build()
        .await?;

    let repo = CredentialRepository::new(db);
    let credential = repo.find_by_user_id(7).await?;

    assert_eq!(
        credential.map(|c| c.steam_id),
        Some("76561197960287930".to_string())
    );

    Ok(())
}

/// Tests finding a user without a credential.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_credential(db).await?;

    let repo = CredentialRepository::new(db);

    assert!(repo.find_by_user_id(u64::MAX).await?.is_none());

    Ok(())
}
