use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::achievement::Achievement;
use crate::models::user::UserStats;
use crate::scoring::achievements::newly_unlocked;

/// Evaluates the achievement catalog against a user's counters and records
/// any newly earned achievements, crediting their bonus points.
pub struct AchievementService {
    pool: PgPool,
}

impl AchievementService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Unlock every achievement the user now qualifies for and has not
    /// already earned. Returns the achievements unlocked by this call.
    #[tracing::instrument(name = "Check and unlock achievements", skip(self))]
    pub async fn check_and_unlock(&self, user_id: Uuid) -> Result<Vec<Achievement>, ApiError> {
        let mut tx = self.pool.begin().await?;

        let stats = sqlx::query_as::<_, UserStats>(
            r#"
            SELECT points, correct_predictions, total_predictions
            FROM users WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

        let catalog = sqlx::query_as::<_, Achievement>(
            "SELECT * FROM achievements ORDER BY condition_value ASC",
        )
        .fetch_all(&mut *tx)
        .await?;

        let unlocked_ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT achievement_id FROM user_achievements WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await?;
        let unlocked_set: std::collections::HashSet<Uuid> = unlocked_ids.into_iter().collect();

        let earned: Vec<Achievement> = newly_unlocked(&catalog, &stats, &unlocked_set)
            .into_iter()
            .cloned()
            .collect();

        for achievement in &earned {
            // ON CONFLICT keeps the unlock exactly-once even if two score
            // runs race past the snapshot above.
            sqlx::query(
                r#"
                INSERT INTO user_achievements (id, user_id, achievement_id, achieved_at)
                VALUES ($1, $2, $3, NOW())
                ON CONFLICT (user_id, achievement_id) DO NOTHING
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(achievement.id)
            .execute(&mut *tx)
            .await?;

            if achievement.points_reward > 0 {
                sqlx::query(
                    "UPDATE users SET points = points + $2, updated_at = NOW() WHERE id = $1",
                )
                .bind(user_id)
                .bind(achievement.points_reward)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        if !earned.is_empty() {
            tracing::info!(
                "User {} unlocked {} achievement(s)",
                user_id,
                earned.len()
            );
        }

        Ok(earned)
    }
}
