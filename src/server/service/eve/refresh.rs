//! Bulk refresh of every cached corporation.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::server::{
    data::eve::corporation::CorporationRepository,
    error::{entity::EntityError, Error},
    model::api::BulkRefreshSummary,
    service::eve::corporation::CorporationService,
};

/// Progress is logged every this many completed corporations.
const PROGRESS_LOG_INTERVAL: usize = 100;

impl CorporationService {
    /// Re-fetches every cached corporation from ESI and writes it back.
    ///
    /// Exactly `worker_count` workers are spawned; each fetches, converts and upserts one
    /// corporation at a time and pauses for the configured request delay in between. Workers
    /// are detached tasks, dropping the returned future does not abort them. A failed
    /// corporation does not stop the others and is not retried.
    ///
    /// # Returns
    /// - `Ok(BulkRefreshSummary)` - Every corporation was refreshed, or none are cached
    /// - `Err(EntityError::BulkRefreshPartialFailure)` - At least one corporation failed
    /// - `Err(Error::DbErr)` - Cached corporation IDs could not be listed
    pub async fn bulk_refresh(&self, worker_count: usize) -> Result<BulkRefreshSummary, Error> {
        let corporation_repo = CorporationRepository::new(&self.db);
        let corporation_ids = corporation_repo.get_all_corporation_ids().await?;

        let total = corporation_ids.len();
        if total == 0 {
            tracing::info!("No cached corporations to refresh");
            return Ok(BulkRefreshSummary::default());
        }

        // A pool without workers would never drain the job channel
        let worker_count = worker_count.max(1);

        tracing::info!(
            corporations = total,
            workers = worker_count,
            "Starting corporation bulk refresh"
        );

        let (job_tx, job_rx) = mpsc::channel::<i64>(total);
        let (result_tx, mut result_rx) = mpsc::channel::<bool>(total);
        let job_rx = Arc::new(Mutex::new(job_rx));

        for worker_id in 0..worker_count {
            let service = self.clone();
            let job_rx = Arc::clone(&job_rx);
            let result_tx = result_tx.clone();

            tokio::spawn(async move {
                loop {
                    let next = job_rx.lock().await.recv().await;
                    let Some(corporation_id) = next else {
                        break;
                    };

                    let result = service.refresh_corporation(corporation_id).await;
                    if let Err(e) = &result {
                        tracing::warn!(
                            worker_id,
                            corporation_id = %corporation_id,
                            error = %e,
                            "Failed to refresh corporation"
                        );
                    }

                    if !service.config.refresh_request_delay.is_zero() {
                        tokio::time::sleep(service.config.refresh_request_delay).await;
                    }

                    if result_tx.send(result.is_ok()).await.is_err() {
                        break;
                    }
                }
            });
        }
        drop(result_tx);

        for corporation_id in corporation_ids {
            // Capacity equals the number of jobs, this never waits
            if job_tx.send(corporation_id).await.is_err() {
                return Err(Error::InternalError(
                    "Bulk refresh job channel closed before all jobs were queued".to_string(),
                ));
            }
        }
        drop(job_tx);

        let mut completed = 0;
        let mut succeeded = 0;
        while completed < total {
            let Some(success) = result_rx.recv().await else {
                // Every worker exited early, count the unfinished corporations as failed
                break;
            };

            completed += 1;
            if success {
                succeeded += 1;
            }

            if completed % PROGRESS_LOG_INTERVAL == 0 && completed < total {
                tracing::info!(
                    completed,
                    total,
                    failed = completed - succeeded,
                    "Corporation bulk refresh progress"
                );
            }
        }

        let failed = total - succeeded;
        tracing::info!(
            total,
            succeeded,
            failed,
            "Corporation bulk refresh complete"
        );

        if failed > 0 {
            return Err(EntityError::BulkRefreshPartialFailure { failed, total }.into());
        }

        Ok(BulkRefreshSummary { total, succeeded })
    }
}
