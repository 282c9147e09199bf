use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Prediction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub match_id: Uuid,
    pub predicted_outcome: Option<PredictedOutcome>,
    pub predicted_home_score: Option<i32>,
    pub predicted_away_score: Option<i32>,
    pub predicted_card_over_under: Option<bool>,
    pub points_awarded: i32,
    pub status: PredictionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PredictedOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

/// pending -> correct | incorrect once scored; processed marks leftover
/// pending rows swept after a match was scored.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PredictionStatus {
    Pending,
    Correct,
    Incorrect,
    Processed,
}

/// Prediction as returned on public match pages: owner hidden.
#[derive(Debug, Serialize)]
pub struct AnonymousPrediction {
    pub id: Uuid,
    pub match_id: Uuid,
    pub predicted_outcome: Option<PredictedOutcome>,
    pub predicted_home_score: Option<i32>,
    pub predicted_away_score: Option<i32>,
    pub points_awarded: i32,
    pub status: PredictionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Prediction> for AnonymousPrediction {
    fn from(p: Prediction) -> Self {
        Self {
            id: p.id,
            match_id: p.match_id,
            predicted_outcome: p.predicted_outcome,
            predicted_home_score: p.predicted_home_score,
            predicted_away_score: p.predicted_away_score,
            points_awarded: p.points_awarded,
            status: p.status,
            created_at: p.created_at,
        }
    }
}

#[derive(Deserialize, Validate)]
pub struct CreatePredictionRequest {
    pub match_id: Uuid,
    pub predicted_outcome: Option<PredictedOutcome>,
    #[validate(range(min = 0, max = 99))]
    pub predicted_home_score: Option<i32>,
    #[validate(range(min = 0, max = 99))]
    pub predicted_away_score: Option<i32>,
    pub predicted_card_over_under: Option<bool>,
}

#[derive(Deserialize, Validate)]
pub struct UpdatePredictionRequest {
    pub predicted_outcome: Option<PredictedOutcome>,
    #[validate(range(min = 0, max = 99))]
    pub predicted_home_score: Option<i32>,
    #[validate(range(min = 0, max = 99))]
    pub predicted_away_score: Option<i32>,
    pub predicted_card_over_under: Option<bool>,
}

#[derive(Serialize)]
pub struct PredictionCheckResponse {
    pub has_predicted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Prediction>,
}

/// Summary returned by the scoring run for one match.
#[derive(Debug, Serialize)]
pub struct ScoringSummary {
    pub match_id: Uuid,
    pub predictions_scored: i64,
    pub exact_score_hits: i64,
    pub correct_outcome_hits: i64,
    pub total_points_awarded: i64,
}
