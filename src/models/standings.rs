use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct SeasonStanding {
    pub id: Uuid,
    pub season_id: Uuid,
    pub team_id: Uuid,
    pub round: i32,
    pub position: i32,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct StandingWithTeam {
    pub id: Uuid,
    pub season_id: Uuid,
    pub team_id: Uuid,
    pub team_name: String,
    pub round: i32,
    pub position: i32,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

/// One row upserted per (season, team, round) by the admin after a round.
#[derive(Deserialize)]
pub struct UpsertStandingRequest {
    pub season_id: Uuid,
    pub team_id: Uuid,
    pub round: i32,
    pub position: i32,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
}

#[derive(Deserialize)]
pub struct StandingsQuery {
    pub round: Option<i32>,
}
