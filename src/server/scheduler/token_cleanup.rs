use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::blacklisted_token::BlacklistedTokenRepository, error::AppError};

/// Starts the blacklist cleanup scheduler.
///
/// Runs at the top of every hour and deletes blacklisted refresh tokens whose
/// expiry has passed. An expired token is rejected on its own, so its blacklist
/// row is no longer needed.
///
/// # Arguments
/// - `db`: Database connection
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; keep it alive for jobs to fire
/// - `Err(AppError::SchedulerErr)` - Failed to create, register or start the job
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired_tokens(&db).await {
                tracing::error!("Error purging expired blacklisted tokens: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Token cleanup scheduler started");

    Ok(scheduler)
}

/// Deletes blacklist rows of tokens that have already expired.
///
/// # Returns
/// - `Ok(u64)` - Number of purged rows
pub async fn purge_expired_tokens(db: &DatabaseConnection) -> Result<u64, AppError> {
    let purged = BlacklistedTokenRepository::new(db)
        .purge_expired(Utc::now())
        .await?;

    if purged > 0 {
        tracing::info!("Purged {} expired blacklisted tokens", purged);
    }

    Ok(purged)
}
