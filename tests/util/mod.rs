//! Helpers shared by the service integration tests.


use std::{sync::Arc, time::Duration};

use cache_test_utils::{constant::TEST_USER_AGENT, TestSetup};
use esi_cache::server::{
    esi::{EntitySource, EsiClient, EsiClientConfig},
    service::eve::{
        corporation::{CorporationService, CorporationServiceConfig},
        credential::{CredentialProvider, DatabaseCredentialProvider},
    },
};

/// Service config without the bulk refresh request delay.
pub fn test_config(deduplicate_cache_misses: bool) -> CorporationServiceConfig {
    CorporationServiceConfig {
        refresh_request_delay: Duration::ZERO,
        deduplicate_cache_misses,
    }
}

/// ESI client pointed at the mock server of the test setup.
pub fn esi_client(test: &TestSetup) -> EsiClient {
    EsiClient::new(EsiClientConfig {
        base_url: test.esi_url(),
        user_agent: TEST_USER_AGENT.to_string(),
        timeout: Duration::from_secs(5),
    })
    .expect("Failed to build ESI client")
}

/// Corporation service using the mock ESI server and the database credential provider.
pub fn corporation_service(test: &TestSetup) -> CorporationService {
    corporation_service_with(
        test,
        Arc::new(esi_client(test)),
        Arc::new(DatabaseCredentialProvider::new(test.db.clone())),
        test_config(true),
    )
}

/// Corporation service with a custom ESI source, credential provider and config.
pub fn corporation_service_with(
    test: &TestSetup,
    source: Arc<dyn EntitySource>,
    credentials: Arc<dyn CredentialProvider>,
    config: CorporationServiceConfig,
) -> CorporationService {
    CorporationService::new(test.db.clone(), source, credentials, config)
}
