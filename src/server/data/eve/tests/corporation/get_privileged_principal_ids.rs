use super::*;

/// Expect the CEOs of live corporations with an enabled setting
#[tokio::test]
async fn returns_ceos_of_enabled_corporations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EveCorporation)
        .with_table(entity::prelude::EveCorporationSetting)
        .with_mock_corporation(98000001, Some(1001))
        .with_mock_corporation(98000002, Some(1002))
        .with_mock_corporation(98000003, Some(1003))
        .with_mock_corporation(98000004, None)
        .with_corporation_setting(98000001, true)
        .with_corporation_setting(98000002, false)
        .with_corporation_setting(98000004, true)
        .build()
        .await?;

    let corporation_repo = CorporationRepository::new(&test.db);
    let result = corporation_repo.get_privileged_principal_ids().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), vec![1001]);

    Ok(())
}

/// Expect an empty list when no corporation settings exist
#[tokio::test]
async fn returns_empty_without_settings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EveCorporation)
        .with_table(entity::prelude::EveCorporationSetting)
        .with_mock_corporation(98000001, Some(1001))
        .build()
        .await?;

    let corporation_repo = CorporationRepository::new(&test.db);
    let ids = corporation_repo.get_privileged_principal_ids().await?;

    assert!(ids.is_empty());

    Ok(())
}

/// Expect soft-deleted corporations to be skipped even with an enabled setting
#[tokio::test]
async fn skips_soft_deleted_corporations() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::EveCorporation)
        .with_table(entity::prelude::EveCorporationSetting)
        .with_corporation_setting(98000001, true)
        .build()
        .await?;
    test.eve().insert_deleted_corporation(98000001).await?;

    let corporation_repo = CorporationRepository::new(&test.db);
    let ids = corporation_repo.get_privileged_principal_ids().await?;

    assert!(ids.is_empty());

    Ok(())
}
