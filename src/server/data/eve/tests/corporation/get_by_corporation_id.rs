use super::*;

/// Expect Some when the corporation is cached
#[tokio::test]
async fn finds_cached_corporation() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::EveCorporation)?;
    let corporation_model = test
        .eve()
        .insert_mock_corporation(98000001, Some(661916654))
        .await?;

    let corporation_repo = CorporationRepository::new(&test.db);
    let result = corporation_repo.get_by_corporation_id(98000001).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let found = result.unwrap();
    assert_eq!(found, Some(corporation_model));

    Ok(())
}

/// Expect None when the corporation is not cached
#[tokio::test]
async fn returns_none_for_unknown_corporation() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EveCorporation)?;

    let corporation_repo = CorporationRepository::new(&test.db);
    let result = corporation_repo.get_by_corporation_id(98000001).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect None when only a soft-deleted row exists
#[tokio::test]
async fn ignores_soft_deleted_corporation() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::EveCorporation)?;
    test.eve().insert_deleted_corporation(98000001).await?;

    let corporation_repo = CorporationRepository::new(&test.db);
    let result = corporation_repo.get_by_corporation_id(98000001).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect Error when the table is missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let corporation_repo = CorporationRepository::new(&test.db);
    let result = corporation_repo.get_by_corporation_id(98000001).await;

    assert!(result.is_err());

    Ok(())
}
