use std::error::Error;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::services::match_lifecycle_service::MatchLifecycleService;

/// Background scheduler that drives the match lifecycle. A single
/// every-minute job promotes scheduled matches whose kickoff time has
/// passed to in_progress.
pub struct SchedulerService {
    scheduler: Arc<Mutex<JobScheduler>>,
    pool: PgPool,
}

impl SchedulerService {
    pub async fn new(pool: PgPool) -> Result<Self, Box<dyn Error>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
            pool,
        })
    }

    /// Register the lifecycle job and start ticking.
    pub async fn start(&self) -> Result<(), Box<dyn Error>> {
        let scheduler = self.scheduler.lock().await;

        let pool = self.pool.clone();
        let lifecycle_job = Job::new_async("0 * * * * *", move |_uuid, _l| {
            let pool = pool.clone();

            Box::pin(async move {
                let lifecycle = MatchLifecycleService::new(pool);
                match lifecycle.run_cycle().await {
                    Ok(started) if !started.is_empty() => {
                        tracing::info!("Match lifecycle cycle started {} match(es)", started.len());
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!("Match lifecycle cycle failed: {}", e);
                    }
                }
            })
        })?;

        scheduler.add(lifecycle_job).await?;
        scheduler.start().await?;

        tracing::info!("Scheduler started (match lifecycle runs every minute)");
        Ok(())
    }

    pub async fn stop(&self) -> Result<(), Box<dyn Error>> {
        let mut scheduler = self.scheduler.lock().await;
        scheduler.shutdown().await?;

        tracing::info!("Scheduler stopped");
        Ok(())
    }
}
