use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::db;
use crate::errors::ApiError;
use crate::models::common::{ApiResponse, Paginated, PaginationQuery};
use crate::models::league::{
    AddRosterEntryRequest, CreateLeagueRequest, CreatePlayerRequest, CreateRefereeRequest,
    CreateSeasonRequest, CreateStadiumRequest, CreateTeamRequest, CreateTransferRequest,
};

// Leagues

#[tracing::instrument(name = "List leagues", skip(pool))]
pub async fn list_leagues(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let leagues = db::catalog::list_leagues(&pool).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Leagues", leagues)))
}

#[tracing::instrument(name = "Create league", skip(form, pool))]
pub async fn create_league(
    form: web::Json<CreateLeagueRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;
    let league = db::catalog::create_league(&pool, &form).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("League created", league)))
}

// Seasons

#[derive(Deserialize)]
pub struct SeasonFilterQuery {
    pub league_id: Option<Uuid>,
}

#[tracing::instrument(name = "List seasons", skip(pool, query))]
pub async fn list_seasons(
    query: web::Query<SeasonFilterQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let seasons = db::catalog::list_seasons(&pool, query.league_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Seasons", seasons)))
}

#[tracing::instrument(name = "Get season", skip(pool))]
pub async fn get_season(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let season = db::catalog::get_season(&pool, path.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("Season"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Season", season)))
}

#[tracing::instrument(name = "Create season", skip(form, pool))]
pub async fn create_season(
    form: web::Json<CreateSeasonRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;

    db::catalog::get_league(&pool, form.league_id)
        .await?
        .ok_or_else(|| ApiError::not_found("League"))?;

    let season = db::catalog::create_season(&pool, &form).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Season created", season)))
}

// Teams

#[tracing::instrument(name = "List teams", skip(pool))]
pub async fn list_teams(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let teams = db::catalog::list_teams(&pool).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Teams", teams)))
}

#[tracing::instrument(name = "Get team", skip(pool))]
pub async fn get_team(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let team = db::catalog::get_team(&pool, path.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("Team"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Team", team)))
}

#[tracing::instrument(name = "Create team", skip(form, pool))]
pub async fn create_team(
    form: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;
    let team = db::catalog::create_team(&pool, &form).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Team created", team)))
}

// Players

#[tracing::instrument(name = "List players", skip(pool, query))]
pub async fn list_players(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let (players, total) =
        db::catalog::list_players(&pool, query.per_page(), query.offset()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Players",
        Paginated::new(players, total, query.page(), query.per_page()),
    )))
}

#[tracing::instrument(name = "Get player", skip(pool))]
pub async fn get_player(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let player = db::catalog::get_player(&pool, path.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("Player"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Player", player)))
}

#[tracing::instrument(name = "Create player", skip(form, pool))]
pub async fn create_player(
    form: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;
    let player = db::catalog::create_player(&pool, &form).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Player created", player)))
}

// Stadiums

#[tracing::instrument(name = "List stadiums", skip(pool))]
pub async fn list_stadiums(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let stadiums = db::catalog::list_stadiums(&pool).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Stadiums", stadiums)))
}

#[tracing::instrument(name = "Create stadium", skip(form, pool))]
pub async fn create_stadium(
    form: web::Json<CreateStadiumRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;
    let stadium = db::catalog::create_stadium(&pool, &form).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Stadium created", stadium)))
}

// Referees

#[tracing::instrument(name = "List referees", skip(pool))]
pub async fn list_referees(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let referees = db::catalog::list_referees(&pool).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Referees", referees)))
}

#[tracing::instrument(name = "Create referee", skip(form, pool))]
pub async fn create_referee(
    form: web::Json<CreateRefereeRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;
    let referee = db::catalog::create_referee(&pool, &form).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Referee created", referee)))
}

// Rosters

#[tracing::instrument(name = "Get team roster", skip(pool))]
pub async fn get_team_roster(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let (team_id, season_id) = path.into_inner();

    db::catalog::get_team(&pool, team_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Team"))?;

    let roster = db::catalog::get_team_roster(&pool, team_id, season_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Roster", roster)))
}

#[tracing::instrument(name = "Add roster entry", skip(form, pool))]
pub async fn add_roster_entry(
    form: web::Json<AddRosterEntryRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let entry = db::catalog::add_roster_entry(&pool, &form)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ApiError::Conflict("Player is already on this roster".into())
            }
            other => other.into(),
        })?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Roster entry added", entry)))
}

// Transfers

#[derive(Deserialize)]
pub struct TransferFilterQuery {
    pub player_id: Option<Uuid>,
}

#[tracing::instrument(name = "List transfers", skip(pool, query))]
pub async fn list_transfers(
    query: web::Query<TransferFilterQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let transfers = db::catalog::list_transfers(&pool, query.player_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Transfers", transfers)))
}

#[tracing::instrument(name = "Create transfer", skip(form, pool))]
pub async fn create_transfer(
    form: web::Json<CreateTransferRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    db::catalog::get_player(&pool, form.player_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Player"))?;

    let transfer = db::catalog::create_transfer(&pool, &form).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Transfer created", transfer)))
}
