use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub code: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Season {
    pub id: Uuid,
    pub league_id: Uuid,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub home_stadium_id: Option<Uuid>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub position: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Stadium {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Referee {
    pub id: Uuid,
    pub full_name: String,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TeamRoster {
    pub id: Uuid,
    pub team_id: Uuid,
    pub player_id: Uuid,
    pub season_id: Uuid,
    pub shirt_number: Option<i32>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Transfer {
    pub id: Uuid,
    pub player_id: Uuid,
    pub from_team_id: Option<Uuid>,
    pub to_team_id: Uuid,
    pub season_id: Option<Uuid>,
    pub transfer_date: Option<NaiveDate>,
    pub transfer_type: Option<String>,
    pub transfer_fee: Option<f64>,
}

// Request DTOs for admin catalog mutations

#[derive(Deserialize, Validate)]
pub struct CreateLeagueRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub code: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct CreateSeasonRequest {
    pub league_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub logo_url: Option<String>,
    pub home_stadium_id: Option<Uuid>,
}

#[derive(Deserialize, Validate)]
pub struct CreatePlayerRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub position: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct CreateStadiumRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    pub address: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Deserialize, Validate)]
pub struct CreateRefereeRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
}

#[derive(Deserialize)]
pub struct AddRosterEntryRequest {
    pub team_id: Uuid,
    pub player_id: Uuid,
    pub season_id: Uuid,
    pub shirt_number: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateTransferRequest {
    pub player_id: Uuid,
    pub from_team_id: Option<Uuid>,
    pub to_team_id: Uuid,
    pub season_id: Option<Uuid>,
    pub transfer_date: Option<NaiveDate>,
    pub transfer_type: Option<String>,
    pub transfer_fee: Option<f64>,
}
