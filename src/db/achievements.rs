use sqlx::PgPool;
use uuid::Uuid;

use crate::models::achievement::{Achievement, CreateAchievementRequest, UnlockedAchievement};

pub async fn get_all_achievements(pool: &PgPool) -> Result<Vec<Achievement>, sqlx::Error> {
    sqlx::query_as::<_, Achievement>("SELECT * FROM achievements ORDER BY condition_value ASC")
        .fetch_all(pool)
        .await
}

pub async fn create_achievement(
    pool: &PgPool,
    req: &CreateAchievementRequest,
) -> Result<Achievement, sqlx::Error> {
    sqlx::query_as::<_, Achievement>(
        r#"
        INSERT INTO achievements (id, name, description, icon_url, condition_type, condition_value, points_reward)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.name)
    .bind(&req.description)
    .bind(&req.icon_url)
    .bind(req.condition_type)
    .bind(req.condition_value)
    .bind(req.points_reward.unwrap_or(0))
    .fetch_one(pool)
    .await
}

pub async fn delete_achievement(pool: &PgPool, achievement_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
        .bind(achievement_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn get_user_achievements(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<UnlockedAchievement>, sqlx::Error> {
    sqlx::query_as::<_, UnlockedAchievement>(
        r#"
        SELECT a.id AS achievement_id, a.name, a.description, a.icon_url,
               a.points_reward, ua.achieved_at
        FROM user_achievements ua
        JOIN achievements a ON a.id = ua.achievement_id
        WHERE ua.user_id = $1
        ORDER BY ua.achieved_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
