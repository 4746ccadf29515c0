use super::*;

/// Tests deleting a credential.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_credential() -> Result<(), DbErr> {
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
    let deleted = repo.delete(42).await?;

    assert!(deleted);
    assert!(entity::prelude::ApiUser::find_by_id("42".to_string())
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a user without a credential.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_unknown_user_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CredentialRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
