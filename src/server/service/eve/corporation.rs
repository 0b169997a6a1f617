use std::{sync::Arc, time::Duration};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::eve::{corporation::CorporationRepository, search::SearchPlan},
    error::Error,
    esi::EntitySource,
    model::{
        api::{AllianceHistoryDto, CorporationDto},
        eve::{alliance_history_from_payload, current_alliance_id, CorporationInfo},
    },
    service::{eve::credential::CredentialProvider, inflight::InflightLocks},
};

/// Tunables of [`CorporationService`].
#[derive(Debug, Clone)]
pub struct CorporationServiceConfig {
    /// Pause of a bulk refresh worker after each corporation, spreads load on ESI
    pub refresh_request_delay: Duration,
    /// Serialize concurrent cache misses for the same corporation behind one ESI fetch
    pub deduplicate_cache_misses: bool,
}

impl Default for CorporationServiceConfig {
    fn default() -> Self {
        Self {
            refresh_request_delay: Duration::from_millis(100),
            deduplicate_cache_misses: true,
        }
    }
}

impl From<&Config> for CorporationServiceConfig {
    fn from(config: &Config) -> Self {
        Self {
            refresh_request_delay: config.refresh_request_delay,
            deduplicate_cache_misses: config.deduplicate_cache_misses,
        }
    }
}

/// Cache-aside access to EVE Online corporations.
///
/// Cheap to clone, clones share the in-flight locks.
#[derive(Clone)]
pub struct CorporationService {
    pub(super) db: DatabaseConnection,
    pub(super) source: Arc<dyn EntitySource>,
    pub(super) credentials: Arc<dyn CredentialProvider>,
    pub(super) config: CorporationServiceConfig,
    inflight: InflightLocks,
}

impl CorporationService {
    /// Creates a new instance of [`CorporationService`]
    pub fn new(
        db: DatabaseConnection,
        source: Arc<dyn EntitySource>,
        credentials: Arc<dyn CredentialProvider>,
        config: CorporationServiceConfig,
    ) -> Self {
        Self {
            db,
            source,
            credentials,
            config,
            inflight: InflightLocks::new(),
        }
    }

    /// Gets a corporation from the cache, fetching it from ESI on a miss.
    ///
    /// A failed cache read is logged and treated as a miss. After a fetch the corporation is
    /// written back; a failed write is logged and the fetched data still returned.
    ///
    /// # Returns
    /// - `Ok(CorporationDto)` - Cached or freshly fetched corporation
    /// - `Err(Error::EsiError)` - Cache miss and the ESI fetch or payload conversion failed
    pub async fn get_info(&self, corporation_id: i64) -> Result<CorporationDto, Error> {
        if let Some(cached) = self.find_cached(corporation_id).await {
            return Ok(cached);
        }

        if !self.config.deduplicate_cache_misses {
            return self.fetch_and_cache(corporation_id).await;
        }

        let _inflight = self.inflight.acquire(corporation_id).await;

        // Another caller may have populated the cache while we waited
        if let Some(cached) = self.find_cached(corporation_id).await {
            return Ok(cached);
        }

        self.fetch_and_cache(corporation_id).await
    }

    /// Searches cached corporations by name or ticker.
    ///
    /// A blank query returns no results without querying the database.
    pub async fn search(&self, query: &str) -> Result<Vec<CorporationDto>, Error> {
        let Some(plan) = SearchPlan::for_query(query) else {
            return Ok(Vec::new());
        };

        let corporation_repo = CorporationRepository::new(&self.db);
        let corporations = corporation_repo.search_by_name(&plan).await?;

        Ok(corporations.into_iter().map(CorporationDto::from).collect())
    }

    /// Gets a corporation's alliance history from ESI, most recent entry last.
    pub async fn get_alliance_history(
        &self,
        corporation_id: i64,
    ) -> Result<Vec<AllianceHistoryDto>, Error> {
        let payload = self.source.fetch_alliance_history(corporation_id).await?;
        let history = alliance_history_from_payload(&payload)?;

        Ok(history.into_iter().map(AllianceHistoryDto::from).collect())
    }

    /// Gets the alliance a corporation currently belongs to according to its ESI alliance
    /// history, `None` when it left its last alliance or never joined one.
    pub async fn get_current_alliance_id(
        &self,
        corporation_id: i64,
    ) -> Result<Option<i64>, Error> {
        let payload = self.source.fetch_alliance_history(corporation_id).await?;
        let history = alliance_history_from_payload(&payload)?;

        Ok(current_alliance_id(&history))
    }

    /// Fetches a corporation from ESI and writes it to the cache.
    ///
    /// Unlike [`Self::get_info`] a failed write is an error, used by the bulk refresh.
    pub(super) async fn refresh_corporation(&self, corporation_id: i64) -> Result<(), Error> {
        let payload = self.source.fetch_corporation(corporation_id).await?;
        let corporation = CorporationInfo::from_payload(corporation_id, &payload)?;

        CorporationRepository::new(&self.db)
            .upsert(corporation)
            .await?;

        Ok(())
    }

    async fn find_cached(&self, corporation_id: i64) -> Option<CorporationDto> {
        let corporation_repo = CorporationRepository::new(&self.db);

        match corporation_repo.get_by_corporation_id(corporation_id).await {
            Ok(Some(corporation)) => Some(corporation.into()),
            Ok(None) => {
                tracing::debug!(corporation_id = %corporation_id, "Corporation cache miss");
                None
            }
            Err(e) => {
                tracing::warn!(
                    corporation_id = %corporation_id,
                    error = %e,
                    "Failed to read corporation from cache, falling back to ESI"
                );
                None
            }
        }
    }

    async fn fetch_and_cache(&self, corporation_id: i64) -> Result<CorporationDto, Error> {
        let payload = self.source.fetch_corporation(corporation_id).await?;
        let corporation = CorporationInfo::from_payload(corporation_id, &payload)?;

        let corporation_repo = CorporationRepository::new(&self.db);
        match corporation_repo.upsert(corporation.clone()).await {
            Ok(model) => Ok(model.into()),
            Err(e) => {
                tracing::warn!(
                    corporation_id = %corporation_id,
                    error = %e,
                    "Failed to write fetched corporation to cache"
                );
                Ok(CorporationDto::from_info(
                    corporation,
                    Utc::now().naive_utc(),
                ))
            }
        }
    }
}
