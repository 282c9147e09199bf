use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::handlers::match_handler;
use crate::models::matches::MatchFilterQuery;

#[get("/matches")]
async fn list_matches(
    filter: web::Query<MatchFilterQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    match_handler::list_matches(filter, pool).await
}

/// Full match detail with events, lineups and referee assignments.
#[get("/matches/{match_id}")]
async fn get_match(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    match_handler::get_match(path, pool).await
}
