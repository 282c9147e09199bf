use actix_web::{delete, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::handlers::{achievement_handler, catalog_handler, match_handler, standings_handler};
use crate::models::achievement::CreateAchievementRequest;
use crate::models::league::{
    AddRosterEntryRequest, CreateLeagueRequest, CreatePlayerRequest, CreateRefereeRequest,
    CreateSeasonRequest, CreateStadiumRequest, CreateTeamRequest, CreateTransferRequest,
};
use crate::models::matches::{
    AddLineupEntryRequest, AddMatchEventRequest, AssignRefereeRequest, CreateMatchRequest,
    MatchResultRequest, MatchStatusRequest,
};
use crate::models::standings::UpsertStandingRequest;

// Matches

#[post("/matches")]
async fn create_match(
    form: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    match_handler::create_match(form, pool).await
}

/// Final score entry. Finishes the match and scores its predictions.
#[put("/matches/{match_id}/result")]
async fn record_result(
    path: web::Path<Uuid>,
    form: web::Json<MatchResultRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    match_handler::record_result(path, form, pool).await
}

#[put("/matches/{match_id}/status")]
async fn set_status(
    path: web::Path<Uuid>,
    form: web::Json<MatchStatusRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    match_handler::set_status(path, form, pool).await
}

#[post("/matches/{match_id}/events")]
async fn add_event(
    path: web::Path<Uuid>,
    form: web::Json<AddMatchEventRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    match_handler::add_event(path, form, pool).await
}

#[post("/matches/{match_id}/lineups")]
async fn add_lineup_entry(
    path: web::Path<Uuid>,
    form: web::Json<AddLineupEntryRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    match_handler::add_lineup_entry(path, form, pool).await
}

#[post("/matches/{match_id}/referees")]
async fn assign_referee(
    path: web::Path<Uuid>,
    form: web::Json<AssignRefereeRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    match_handler::assign_referee(path, form, pool).await
}

// Catalog

#[post("/leagues")]
async fn create_league(
    form: web::Json<CreateLeagueRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::create_league(form, pool).await
}

#[post("/seasons")]
async fn create_season(
    form: web::Json<CreateSeasonRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::create_season(form, pool).await
}

#[post("/teams")]
async fn create_team(
    form: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::create_team(form, pool).await
}

#[post("/players")]
async fn create_player(
    form: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::create_player(form, pool).await
}

#[post("/stadiums")]
async fn create_stadium(
    form: web::Json<CreateStadiumRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::create_stadium(form, pool).await
}

#[post("/referees")]
async fn create_referee(
    form: web::Json<CreateRefereeRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::create_referee(form, pool).await
}

#[post("/rosters")]
async fn add_roster_entry(
    form: web::Json<AddRosterEntryRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::add_roster_entry(form, pool).await
}

#[post("/transfers")]
async fn create_transfer(
    form: web::Json<CreateTransferRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::create_transfer(form, pool).await
}

// Standings

#[post("/standings")]
async fn upsert_standing(
    form: web::Json<UpsertStandingRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    standings_handler::upsert_standing(form, pool).await
}

// Achievements

#[post("/achievements")]
async fn create_achievement(
    form: web::Json<CreateAchievementRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    achievement_handler::create_achievement(form, pool).await
}

#[delete("/achievements/{achievement_id}")]
async fn delete_achievement(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    achievement_handler::delete_achievement(path, pool).await
}
