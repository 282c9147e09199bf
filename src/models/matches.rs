use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub season_id: Uuid,
    pub round: Option<String>,
    pub kickoff_time: DateTime<Utc>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: MatchStatus,
    pub predictions_processed: bool,
    pub stadium_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle: scheduled -> in_progress -> finished. Postponed and cancelled
/// are absorbing states reachable only by explicit admin action.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
    Postponed,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::InProgress => "in_progress",
            MatchStatus::Finished => "finished",
            MatchStatus::Postponed => "postponed",
            MatchStatus::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "in_progress" => Ok(MatchStatus::InProgress),
            "finished" => Ok(MatchStatus::Finished),
            "postponed" => Ok(MatchStatus::Postponed),
            "cancelled" => Ok(MatchStatus::Cancelled),
            other => Err(format!("unknown match status: {}", other)),
        }
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchEvent {
    pub id: Uuid,
    pub match_id: Uuid,
    pub team_id: Uuid,
    pub player_id: Uuid,
    pub event_type: String,
    pub minute: i32,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchLineup {
    pub id: Uuid,
    pub match_id: Uuid,
    pub team_id: Uuid,
    pub player_id: Uuid,
    pub is_starter: bool,
    pub shirt_number: i32,
    pub position: Option<String>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchReferee {
    pub id: Uuid,
    pub match_id: Uuid,
    pub referee_id: Uuid,
    pub role: String,
}

/// Match joined with team and stadium names for list/detail responses
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchWithTeams {
    #[serde(flatten)]
    pub match_row: Match,
    pub home_team_name: String,
    pub away_team_name: String,
    pub stadium_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchDetail {
    #[serde(flatten)]
    pub match_with_teams: MatchWithTeams,
    pub events: Vec<MatchEvent>,
    pub lineups: Vec<MatchLineup>,
    pub referees: Vec<MatchReferee>,
}

// Request DTOs

#[derive(Deserialize)]
pub struct CreateMatchRequest {
    pub season_id: Uuid,
    pub round: Option<String>,
    pub kickoff_time: DateTime<Utc>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub stadium_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct MatchResultRequest {
    pub home_score: i32,
    pub away_score: i32,
}

#[derive(Deserialize)]
pub struct MatchStatusRequest {
    pub status: MatchStatus,
}

#[derive(Deserialize)]
pub struct MatchFilterQuery {
    pub season_id: Option<Uuid>,
    pub round: Option<String>,
    pub status: Option<MatchStatus>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[derive(Deserialize)]
pub struct AddMatchEventRequest {
    pub team_id: Uuid,
    pub player_id: Uuid,
    pub event_type: String,
    pub minute: i32,
}

#[derive(Deserialize)]
pub struct AddLineupEntryRequest {
    pub team_id: Uuid,
    pub player_id: Uuid,
    pub is_starter: bool,
    pub shirt_number: i32,
    pub position: Option<String>,
}

#[derive(Deserialize)]
pub struct AssignRefereeRequest {
    pub referee_id: Uuid,
    pub role: String,
}
