use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Achievement {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub condition_type: ConditionType,
    pub condition_value: i32,
    pub points_reward: i32,
    pub created_at: DateTime<Utc>,
}

/// Threshold kind an achievement is keyed on, checked against the user's
/// aggregate counters.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ConditionType {
    TotalPoints,
    CorrectPredictions,
    TotalPredictions,
}

/// Join of user_achievements with the achievement catalog row
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct UnlockedAchievement {
    pub achievement_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub points_reward: i32,
    pub achieved_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate)]
pub struct CreateAchievementRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub condition_type: ConditionType,
    pub condition_value: i32,
    pub points_reward: Option<i32>,
}
