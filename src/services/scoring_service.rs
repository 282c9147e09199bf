use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::matches::{Match, MatchStatus};
use crate::models::prediction::{Prediction, ScoringSummary};
use crate::scoring::points::{score_prediction, AwardTier};

/// Scores every pending prediction on a finished match and folds the awards
/// into the owners' aggregate counters.
pub struct ScoringService {
    pool: PgPool,
}

impl ScoringService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Score all pending predictions for one match. Runs in a single
    /// transaction; the `predictions_processed` flag is claimed with the row
    /// lock up front so a second invocation (or a concurrent one) fails with
    /// Conflict instead of double-awarding points.
    #[tracing::instrument(name = "Score match predictions", skip(self))]
    pub async fn score_match(&self, match_id: Uuid) -> Result<ScoringSummary, ApiError> {
        let mut tx = self.pool.begin().await?;

        let match_row = sqlx::query_as::<_, Match>(
            "SELECT * FROM matches WHERE id = $1 FOR UPDATE",
        )
        .bind(match_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::not_found("Match"))?;

        if match_row.status != MatchStatus::Finished {
            return Err(ApiError::Conflict("Match not finished".into()));
        }
        if match_row.predictions_processed {
            return Err(ApiError::Conflict(
                "Predictions for this match were already scored".into(),
            ));
        }

        let (home_score, away_score) = match (match_row.home_score, match_row.away_score) {
            (Some(h), Some(a)) => (h, a),
            _ => {
                return Err(ApiError::Conflict(
                    "Match is finished but has no final score".into(),
                ))
            }
        };

        // Claim the guard inside the same transaction as the awards.
        sqlx::query("UPDATE matches SET predictions_processed = TRUE, updated_at = NOW() WHERE id = $1")
            .bind(match_id)
            .execute(&mut *tx)
            .await?;

        let pending = sqlx::query_as::<_, Prediction>(
            "SELECT * FROM predictions WHERE match_id = $1 AND status = 'pending' FOR UPDATE",
        )
        .bind(match_id)
        .fetch_all(&mut *tx)
        .await?;

        let mut summary = ScoringSummary {
            match_id,
            predictions_scored: 0,
            exact_score_hits: 0,
            correct_outcome_hits: 0,
            total_points_awarded: 0,
        };

        for prediction in &pending {
            let award = score_prediction(prediction, home_score, away_score);

            sqlx::query(
                r#"
                UPDATE predictions
                SET points_awarded = $2, status = $3, updated_at = NOW()
                WHERE id = $1
                "#,
            )
            .bind(prediction.id)
            .bind(award.points)
            .bind(award.status())
            .execute(&mut *tx)
            .await?;

            // total_predictions counts every scored attempt; correct_predictions
            // only the ones that earned points.
            sqlx::query(
                r#"
                UPDATE users
                SET points = points + $2,
                    total_predictions = total_predictions + 1,
                    correct_predictions = correct_predictions + CASE WHEN $2 > 0 THEN 1 ELSE 0 END,
                    updated_at = NOW()
                WHERE id = $1
                "#,
            )
            .bind(prediction.user_id)
            .bind(award.points)
            .execute(&mut *tx)
            .await?;

            summary.predictions_scored += 1;
            summary.total_points_awarded += award.points as i64;
            match award.tier {
                AwardTier::ExactScore => summary.exact_score_hits += 1,
                AwardTier::CorrectOutcome => summary.correct_outcome_hits += 1,
                AwardTier::Miss => {}
            }
        }

        // Any pending row that slipped in between the snapshot and here gets
        // closed out without points.
        sqlx::query(
            "UPDATE predictions SET status = 'processed', updated_at = NOW() WHERE match_id = $1 AND status = 'pending'",
        )
        .bind(match_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Scored {} predictions for match {} ({} exact, {} outcome-only, {} points awarded)",
            summary.predictions_scored,
            match_id,
            summary.exact_score_hits,
            summary.correct_outcome_hits,
            summary.total_points_awarded
        );

        Ok(summary)
    }
}
