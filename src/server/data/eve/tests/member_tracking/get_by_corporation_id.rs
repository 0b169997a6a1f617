use super::*;

/// Expect only rows of the requested corporation ordered by character ID
#[tokio::test]
async fn returns_rows_of_corporation() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::EveCorporationMemberTracking)?;
    test.eve().insert_mock_member_tracking(98000001, 3).await?;
    test.eve().insert_mock_member_tracking(98000001, 1).await?;
    test.eve().insert_mock_member_tracking(98000002, 2).await?;

    let tracking_repo = MemberTrackingRepository::new(&test.db);
    let result = tracking_repo.get_by_corporation_id(98000001).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let character_ids: Vec<i64> = result.unwrap().iter().map(|row| row.character_id).collect();
    assert_eq!(character_ids, vec![1, 3]);

    Ok(())
}
