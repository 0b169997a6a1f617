//! Cron trigger for the periodic corporation jobs.
//!
//! The scheduler only calls the service operations, [`CorporationService::bulk_refresh`] and
//! [`CorporationService::validate_credentials`] on their configured cron expressions. Both
//! are safe to re-run, a missed or overlapping run is harmless.

use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, service::eve::corporation::CorporationService};

pub mod config;

use self::config::ScheduleConfig;

/// Job scheduler for the background corporation jobs.
pub struct Scheduler {
    service: CorporationService,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(service: CorporationService) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { service, sched })
    }

    /// Registers the bulk refresh and credential validation jobs and starts the scheduler.
    ///
    /// # Returns
    /// - `Ok(())` - Both jobs registered and the scheduler started
    /// - `Err(Error::SchedulerError)` - Invalid cron expression or scheduler failure
    pub async fn start(&mut self, config: &ScheduleConfig) -> Result<(), Error> {
        self.register_jobs(config).await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Stops the scheduler, runs already in progress are not aborted.
    pub async fn shutdown(&mut self) -> Result<(), Error> {
        self.sched.shutdown().await?;

        Ok(())
    }

    async fn register_jobs(&mut self, config: &ScheduleConfig) -> Result<(), Error> {
        let worker_count = config.refresh_worker_count;
        self.schedule_job(
            &config.refresh_cron,
            "corporation bulk refresh",
            move |service| async move {
                let summary = service.bulk_refresh(worker_count).await?;
                Ok(format!("{} corporation(s) refreshed", summary.succeeded))
            },
        )
        .await?;

        self.schedule_job(
            &config.credential_validation_cron,
            "credential validation",
            |service| async move {
                let report = service.validate_credentials().await?;
                Ok(format!(
                    "{} valid, {} invalid, {} missing",
                    report.valid, report.invalid, report.missing
                ))
            },
        )
        .await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The function receives a clone of the corporation service. On execution the job logs
    /// the summary returned by the function, or the error at `error` level.
    ///
    /// # Arguments
    /// - `cron` - Cron expression with seconds, e.g. `"0 0 */6 * * *"`
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async function running the job
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job (invalid cron expression or scheduler error)
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(CorporationService) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<String, Error>> + Send + 'static,
    {
        let service = self.service.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let service = service.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    tracing::info!("Running scheduled {}", name);
                    match function(service).await {
                        Ok(summary) => tracing::info!("Finished scheduled {}: {}", name, summary),
                        Err(e) => tracing::error!("Error running scheduled {}: {}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
