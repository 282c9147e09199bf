use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::handlers::catalog_handler::{self, SeasonFilterQuery, TransferFilterQuery};
use crate::handlers::standings_handler;
use crate::models::common::PaginationQuery;
use crate::models::standings::StandingsQuery;

#[get("/leagues")]
async fn list_leagues(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_leagues(pool).await
}

#[get("/seasons")]
async fn list_seasons(
    query: web::Query<SeasonFilterQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_seasons(query, pool).await
}

#[get("/seasons/{season_id}")]
async fn get_season(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::get_season(path, pool).await
}

#[get("/seasons/{season_id}/standings")]
async fn get_standings(
    path: web::Path<Uuid>,
    query: web::Query<StandingsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    standings_handler::get_standings(path, query, pool).await
}

#[get("/teams")]
async fn list_teams(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_teams(pool).await
}

#[get("/teams/{team_id}")]
async fn get_team(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::get_team(path, pool).await
}

#[get("/teams/{team_id}/roster/{season_id}")]
async fn get_team_roster(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::get_team_roster(path, pool).await
}

#[get("/players")]
async fn list_players(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_players(query, pool).await
}

#[get("/players/{player_id}")]
async fn get_player(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::get_player(path, pool).await
}

#[get("/stadiums")]
async fn list_stadiums(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_stadiums(pool).await
}

#[get("/referees")]
async fn list_referees(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_referees(pool).await
}

#[get("/transfers")]
async fn list_transfers(
    query: web::Query<TransferFilterQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_transfers(query, pool).await
}
