use cache_test_utils::prelude::*;
use esi_cache::server::error::{entity::EntityError, Error, ErrorClass};
use serde_json::json;

use crate::util::corporation_service;

const CORPORATION_ID: i64 = 98000001;

/// Expect member character IDs to be returned for the recorded CEO
#[tokio::test]
async fn returns_member_ids() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_cache_tables()
        .with_mock_corporation(CORPORATION_ID, Some(factory::MOCK_CEO_ID))
        .with_mock_credential(factory::MOCK_CEO_ID, Some(CORPORATION_ID), true)
        .build()
        .await?;
    let mock = test.eve().create_members_endpoint(
        CORPORATION_ID,
        json!([2114794365, 2114794366.0, factory::MOCK_CEO_ID]),
        1,
    );
    let service = corporation_service(&test);

    let result = service
        .get_members(CORPORATION_ID, factory::MOCK_CEO_ID)
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(
        result.unwrap(),
        vec![2114794365, 2114794366, factory::MOCK_CEO_ID]
    );

    mock.assert();

    Ok(())
}

/// Expect a claim by someone other than the recorded CEO to be refused before any ESI call
#[tokio::test]
async fn rejects_principal_that_is_not_ceo() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_cache_tables()
        .with_mock_corporation(CORPORATION_ID, Some(factory::MOCK_CEO_ID))
        .with_mock_credential(555, Some(CORPORATION_ID), true)
        .build()
        .await?;
    let mock = test
        .eve()
        .create_members_endpoint(CORPORATION_ID, json!([555]), 0);
    let service = corporation_service(&test);

    let result = service.get_members(CORPORATION_ID, 555).await;

    assert!(matches!(
        result,
        Err(Error::EntityError(EntityError::AuthorizationMismatch { .. }))
    ));
    assert_eq!(result.unwrap_err().class(), ErrorClass::Forbidden);

    mock.assert();

    Ok(())
}

/// Expect a malformed payload to be rejected
#[tokio::test]
async fn rejects_malformed_payload() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_cache_tables()
        .with_mock_corporation(CORPORATION_ID, Some(factory::MOCK_CEO_ID))
        .with_mock_credential(factory::MOCK_CEO_ID, Some(CORPORATION_ID), true)
        .build()
        .await?;
    let mock = test.eve().create_members_endpoint(
        CORPORATION_ID,
        json!({ "members": [2114794365] }),
        1,
    );
    let service = corporation_service(&test);

    let result = service
        .get_members(CORPORATION_ID, factory::MOCK_CEO_ID)
        .await;

    assert!(matches!(result, Err(Error::EsiError(_))));

    mock.assert();

    Ok(())
}
