use sqlx::PgPool;
use uuid::Uuid;

use crate::models::prediction::{
    CreatePredictionRequest, Prediction, UpdatePredictionRequest,
};

pub async fn get_prediction(
    pool: &PgPool,
    prediction_id: Uuid,
) -> Result<Option<Prediction>, sqlx::Error> {
    sqlx::query_as::<_, Prediction>("SELECT * FROM predictions WHERE id = $1")
        .bind(prediction_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_user_match_prediction(
    pool: &PgPool,
    user_id: Uuid,
    match_id: Uuid,
) -> Result<Option<Prediction>, sqlx::Error> {
    sqlx::query_as::<_, Prediction>(
        "SELECT * FROM predictions WHERE user_id = $1 AND match_id = $2",
    )
    .bind(user_id)
    .bind(match_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_prediction(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreatePredictionRequest,
) -> Result<Prediction, sqlx::Error> {
    sqlx::query_as::<_, Prediction>(
        r#"
        INSERT INTO predictions (
            id, user_id, match_id, predicted_outcome,
            predicted_home_score, predicted_away_score, predicted_card_over_under,
            points_awarded, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, 0, 'pending')
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(req.match_id)
    .bind(req.predicted_outcome)
    .bind(req.predicted_home_score)
    .bind(req.predicted_away_score)
    .bind(req.predicted_card_over_under)
    .fetch_one(pool)
    .await
}

/// Full-field update of the mutable guess columns. Omitted fields clear the
/// previous guess, which is how result-only predictions drop stale scores.
pub async fn update_prediction(
    pool: &PgPool,
    prediction_id: Uuid,
    req: &UpdatePredictionRequest,
) -> Result<Prediction, sqlx::Error> {
    sqlx::query_as::<_, Prediction>(
        r#"
        UPDATE predictions
        SET predicted_outcome = $2,
            predicted_home_score = $3,
            predicted_away_score = $4,
            predicted_card_over_under = $5,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(prediction_id)
    .bind(req.predicted_outcome)
    .bind(req.predicted_home_score)
    .bind(req.predicted_away_score)
    .bind(req.predicted_card_over_under)
    .fetch_one(pool)
    .await
}

pub async fn delete_prediction(pool: &PgPool, prediction_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM predictions WHERE id = $1")
        .bind(prediction_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn get_user_predictions(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Prediction>, i64), sqlx::Error> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM predictions WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    let predictions = sqlx::query_as::<_, Prediction>(
        r#"
        SELECT * FROM predictions
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok((predictions, total))
}

/// Predictions the user has placed on matches that have not kicked off yet,
/// soonest kickoff first.
pub async fn get_user_upcoming_predictions(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Prediction>, sqlx::Error> {
    sqlx::query_as::<_, Prediction>(
        r#"
        SELECT p.* FROM predictions p
        JOIN matches m ON m.id = p.match_id
        WHERE p.user_id = $1 AND m.status = 'scheduled'
        ORDER BY m.kickoff_time ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_match_predictions(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Vec<Prediction>, sqlx::Error> {
    sqlx::query_as::<_, Prediction>(
        "SELECT * FROM predictions WHERE match_id = $1 ORDER BY created_at DESC",
    )
    .bind(match_id)
    .fetch_all(pool)
    .await
}
