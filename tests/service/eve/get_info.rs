use std::{sync::Arc, time::Duration};

use cache_test_utils::prelude::*;
use esi_cache::server::{
    error::{Error, ErrorClass},
    service::eve::credential::DatabaseCredentialProvider,
};
use sea_orm::EntityTrait;
use tokio::sync::Barrier;

use crate::util::{
    corporation_service, corporation_service_with,
    fake::{FakeCredentialProvider, FakeSource},
    test_config,
};

/// Expect a cache miss to fetch from ESI once and later calls to be served from the cache
#[tokio::test]
async fn fetches_once_then_serves_from_cache() -> Result<(), TestError> {
    let corporation_id = 98000001;
    let test = TestBuilder::new()
        .with_cache_tables()
        .with_corporation_endpoint(
            corporation_id,
            factory::mock_corporation(Some(99013534), factory::MOCK_CEO_ID),
            1,
        )
        .build()
        .await?;
    let service = corporation_service(&test);

    let first = service.get_info(corporation_id).await;
    let second = service.get_info(corporation_id).await;

    assert!(first.is_ok(), "Error: {:?}", first);
    assert!(second.is_ok(), "Error: {:?}", second);
    let (first, second) = (first.unwrap(), second.unwrap());
    assert_eq!(first.name, "The Order of Autumn");
    assert_eq!(first.alliance_id, Some(99013534));
    assert_eq!(first.member_count, 21);
    assert_eq!(first, second);

    let rows = entity::prelude::EveCorporation::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);

    test.assert_mocks();

    Ok(())
}

/// Expect a cached corporation to be returned without any ESI request
#[tokio::test]
async fn cache_hit_skips_esi() -> Result<(), TestError> {
    let corporation_id = 98000001;
    let test = TestBuilder::new()
        .with_cache_tables()
        .with_mock_corporation(corporation_id, Some(factory::MOCK_CEO_ID))
        .with_corporation_endpoint(
            corporation_id,
            factory::mock_corporation(None, factory::MOCK_CEO_ID),
            0,
        )
        .build()
        .await?;
    let service = corporation_service(&test);

    let result = service.get_info(corporation_id).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().ceo_id, Some(factory::MOCK_CEO_ID));

    test.assert_mocks();

    Ok(())
}

/// Expect an ESI 404 to surface as a not found error and nothing to be cached
#[tokio::test]
async fn esi_not_found_is_classified_not_found() -> Result<(), TestError> {
    let corporation_id = 98999999;
    let mut test = TestBuilder::new().with_cache_tables().build().await?;
    let mock = test
        .eve()
        .create_error_endpoint(&format!("/corporations/{}", corporation_id), 404, 1);
    let service = corporation_service(&test);

    let result = service.get_info(corporation_id).await;

    assert!(matches!(result, Err(Error::EsiError(_))));
    assert_eq!(result.unwrap_err().class(), ErrorClass::NotFound);

    let rows = entity::prelude::EveCorporation::find().all(&test.db).await?;
    assert!(rows.is_empty());

    mock.assert();

    Ok(())
}

/// Expect an ESI server error to be classified as unavailable
#[tokio::test]
async fn esi_server_error_is_classified_unavailable() -> Result<(), TestError> {
    let corporation_id = 98000001;
    let mut test = TestBuilder::new().with_cache_tables().build().await?;
    let mock = test
        .eve()
        .create_error_endpoint(&format!("/corporations/{}", corporation_id), 503, 1);
    let service = corporation_service(&test);

    let result = service.get_info(corporation_id).await;

    assert_eq!(result.unwrap_err().class(), ErrorClass::Unavailable);

    mock.assert();

    Ok(())
}

/// Expect a payload missing required fields to fail without caching anything
#[tokio::test]
async fn invalid_payload_is_rejected() -> Result<(), TestError> {
    let corporation_id = 98000001;
    let test = TestBuilder::new()
        .with_cache_tables()
        .with_corporation_endpoint(corporation_id, serde_json::json!({ "ticker": "F4LL." }), 1)
        .build()
        .await?;
    let service = corporation_service(&test);

    let result = service.get_info(corporation_id).await;

    assert!(matches!(result, Err(Error::EsiError(_))));

    let rows = entity::prelude::EveCorporation::find().all(&test.db).await?;
    assert!(rows.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect the fetched corporation to be returned when the cache write fails
#[tokio::test]
async fn cache_write_failure_still_returns_fetched_data() -> Result<(), TestError> {
    let corporation_id = 98000001;
    let test = TestBuilder::new()
        .with_corporation_endpoint(
            corporation_id,
            factory::mock_corporation(None, factory::MOCK_CEO_ID),
            1,
        )
        .build()
        .await?;
    let service = corporation_service(&test);

    let result = service.get_info(corporation_id).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().ticker, "F4LL.");

    test.assert_mocks();

    Ok(())
}

/// Expect concurrent misses for one corporation to share a single ESI fetch
#[tokio::test]
async fn concurrent_misses_share_one_fetch() -> Result<(), TestError> {
    let corporation_id = 98000001;
    let test = TestBuilder::new().with_cache_tables().build().await?;
    let source = Arc::new(FakeSource::new().with_delay(Duration::from_millis(50)));
    let service = corporation_service_with(
        &test,
        source.clone(),
        Arc::new(FakeCredentialProvider::new()),
        test_config(true),
    );

    let calls = (0..8).map(|_| service.get_info(corporation_id));
    let results = futures::future::join_all(calls).await;

    assert!(results.iter().all(|result| result.is_ok()));
    assert_eq!(source.calls(), 1);

    let rows = entity::prelude::EveCorporation::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Expect every concurrent miss to fetch when deduplication is disabled
///
/// The barrier only opens once all callers are inside the fetch at the same time.
#[tokio::test]
async fn concurrent_misses_fetch_independently_without_dedup() -> Result<(), TestError> {
    let corporation_id = 98000001;
    let callers = 4;
    let test = TestBuilder::new().with_cache_tables().build().await?;
    let source = Arc::new(FakeSource::new().with_barrier(Arc::new(Barrier::new(callers))));
    let service = corporation_service_with(
        &test,
        source.clone(),
        Arc::new(DatabaseCredentialProvider::new(test.db.clone())),
        test_config(false),
    );

    let calls = (0..callers).map(|_| service.get_info(corporation_id));
    let results = tokio::time::timeout(
        Duration::from_secs(5),
        futures::future::join_all(calls),
    )
    .await
    .expect("Fetches did not run concurrently");

    assert!(results.iter().all(|result| result.is_ok()));
    assert_eq!(source.calls(), callers);

    Ok(())
}

/// Expect misses for different corporations not to wait on each other
#[tokio::test]
async fn misses_for_different_corporations_run_concurrently() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cache_tables().build().await?;
    let source = Arc::new(FakeSource::new().with_barrier(Arc::new(Barrier::new(2))));
    let service = corporation_service_with(
        &test,
        source.clone(),
        Arc::new(FakeCredentialProvider::new()),
        test_config(true),
    );

    let (first, second) = tokio::time::timeout(Duration::from_secs(5), async {
        tokio::join!(service.get_info(98000001), service.get_info(98000002))
    })
    .await
    .expect("Fetches for different corporations were serialized");

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(source.calls(), 2);

    Ok(())
}
