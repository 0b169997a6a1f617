use super::*;

/// Expect all entries to be inserted for a corporation without tracking rows
#[tokio::test]
async fn inserts_entries() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EveCorporationMemberTracking)?;

    let tracking_repo = MemberTrackingRepository::new(&test.db);
    let result = tracking_repo
        .replace_for_corporation(98000001, &mock_entries(&[1, 2, 3]))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), 3);

    let stored = tracking_repo.get_by_corporation_id(98000001).await?;
    let character_ids: Vec<i64> = stored.iter().map(|row| row.character_id).collect();
    assert_eq!(character_ids, vec![1, 2, 3]);
    assert_eq!(stored[0].location_id, Some(60003760));
    assert!(stored[0].logon_date.is_some());

    Ok(())
}

/// Expect previous rows of the corporation to be replaced, not merged
#[tokio::test]
async fn replaces_previous_snapshot() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::EveCorporationMemberTracking)?;
    test.eve().insert_mock_member_tracking(98000001, 1).await?;
    test.eve().insert_mock_member_tracking(98000001, 2).await?;

    let tracking_repo = MemberTrackingRepository::new(&test.db);
    tracking_repo
        .replace_for_corporation(98000001, &mock_entries(&[2, 4]))
        .await?;

    let stored = tracking_repo.get_by_corporation_id(98000001).await?;
    let character_ids: Vec<i64> = stored.iter().map(|row| row.character_id).collect();
    assert_eq!(character_ids, vec![2, 4]);

    Ok(())
}

/// Expect empty input to clear the corporation's tracking
#[tokio::test]
async fn empty_entries_clear_tracking() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::EveCorporationMemberTracking)?;
    test.eve().insert_mock_member_tracking(98000001, 1).await?;

    let tracking_repo = MemberTrackingRepository::new(&test.db);
    let inserted = tracking_repo.replace_for_corporation(98000001, &[]).await?;

    assert_eq!(inserted, 0);
    assert!(tracking_repo
        .get_by_corporation_id(98000001)
        .await?
        .is_empty());

    Ok(())
}

/// Expect rows of other corporations to be left untouched
#[tokio::test]
async fn leaves_other_corporations_untouched() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::EveCorporationMemberTracking)?;
    test.eve().insert_mock_member_tracking(98000002, 7).await?;

    let tracking_repo = MemberTrackingRepository::new(&test.db);
    tracking_repo
        .replace_for_corporation(98000001, &mock_entries(&[1]))
        .await?;

    let other = tracking_repo.get_by_corporation_id(98000002).await?;
    assert_eq!(other.len(), 1);
    assert_eq!(other[0].character_id, 7);

    Ok(())
}

/// Expect snapshots larger than one insert batch to be stored completely
#[tokio::test]
async fn inserts_in_batches() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EveCorporationMemberTracking)?;
    let character_ids: Vec<i64> = (1..=1201).collect();

    let tracking_repo = MemberTrackingRepository::new(&test.db);
    let inserted = tracking_repo
        .replace_for_corporation(98000001, &mock_entries(&character_ids))
        .await?;

    assert_eq!(inserted, 1201);
    assert_eq!(
        tracking_repo.get_by_corporation_id(98000001).await?.len(),
        1201
    );

    Ok(())
}

/// Expect an error and the previous snapshot intact when the insert fails
#[tokio::test]
async fn failed_insert_rolls_back() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::EveCorporationMemberTracking)?;
    test.eve().insert_mock_member_tracking(98000001, 1).await?;

    // Duplicate character IDs violate the (corporation_id, character_id) uniqueness
    // enforced by the index below
    sea_orm::ConnectionTrait::execute_unprepared(
        &test.db,
        "CREATE UNIQUE INDEX idx_tracking_unique ON eve_corporation_member_tracking \
         (corporation_id, character_id)",
    )
    .await?;

    let tracking_repo = MemberTrackingRepository::new(&test.db);
    let result = tracking_repo
        .replace_for_corporation(98000001, &mock_entries(&[5, 5]))
        .await;

    assert!(result.is_err());
    let stored = tracking_repo.get_by_corporation_id(98000001).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].character_id, 1);

    Ok(())
}
