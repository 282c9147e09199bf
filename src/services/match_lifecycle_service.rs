use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Flips matches from scheduled to in_progress once their kickoff time has
/// passed. Runs from the scheduler tick, never from request handlers.
pub struct MatchLifecycleService {
    pool: PgPool,
}

impl MatchLifecycleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Start every scheduled match whose kickoff is at or before `now`,
    /// initialising null scores to 0. One transaction: all qualifying
    /// matches flip together or none do. Re-running with the same clock
    /// value is a no-op since started matches no longer qualify.
    pub async fn start_due_matches(&self, now: DateTime<Utc>) -> Result<Vec<Uuid>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let started: Vec<Uuid> = sqlx::query_scalar(
            r#"
            UPDATE matches
            SET status = 'in_progress',
                home_score = COALESCE(home_score, 0),
                away_score = COALESCE(away_score, 0),
                updated_at = NOW()
            WHERE status = 'scheduled' AND kickoff_time <= $1
            RETURNING id
            "#,
        )
        .bind(now)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        if !started.is_empty() {
            tracing::info!("Started {} matches past kickoff", started.len());
        }

        Ok(started)
    }

    /// One lifecycle tick against the wall clock.
    pub async fn run_cycle(&self) -> Result<Vec<Uuid>, sqlx::Error> {
        self.start_due_matches(Utc::now()).await
    }
}
