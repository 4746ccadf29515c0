use super::*;

/// Tests storing a new credential.
///
/// Verifies that the repository inserts the row with the user ID stored as a string
/// and returns the converted domain model.
///
/// Expected: Ok with the credential
#[tokio::test]
async fn creates_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CredentialRepository::new(db);
    let credential = repo
        .create(CreateCredentialParam {
            user_id: 42,
            steam_id: "76561197960287930".to_string(),
            token_hash: "ab".repeat(32),
        })
        .await?;

    assert_eq!(credential.user_id, 42);
    assert_eq!(credential.steam_id, "76561197960287930");
    assert_eq!(credential.token_hash, "ab".repeat(32));

    let row = entity::prelude::ApiUser::find_by_id("42".to_string())
        .one(db)
        .await?;
    assert!(row.is_some());

    Ok(())
}

/// Tests storing a second credential for the same user.
///
/// Expected: Err(AppError::DbErr) from the primary key constraint
#[tokio::test]
async fn rejects_duplicate_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::credential::CredentialFactory::new(db)
        .user_id(42)
        .build()
        .await?;

    let repo = CredentialRepository::new(db);
    let result = repo
        .create(CreateCredentialParam {
            user_id: 42,
            steam_id: "76561197960287931".to_string(),
            token_hash: "cd".repeat(32),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
