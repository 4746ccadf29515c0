use super::*;

/// Tests listing credentials.
///
/// Verifies that every stored credential is returned and that an empty table yields
/// an empty list.
///
/// Expected: Ok with both credentials
#[tokio::test]
async fn lists_all_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = CredentialRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    factory::credential::CredentialFactory::new(db)
        .user_id(1001)
        .build()
        .await?;
    factory::credential::CredentialFactory::new(db)
        .user_id(1002)
        .build()
        .await?;

    let mut ids: Vec<u64> = repo.get_all().await?.iter().map(|c| c.user_id).collect();
    ids.sort();

    assert_eq!(ids, vec![1001, 1002]);

    Ok(())
}
