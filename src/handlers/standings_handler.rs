use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::standings::{StandingsQuery, UpsertStandingRequest};

/// Standings table for a season, at the latest round unless a specific
/// round is requested.
#[tracing::instrument(name = "Get season standings", skip(pool, query))]
pub async fn get_standings(
    path: web::Path<Uuid>,
    query: web::Query<StandingsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let season_id = path.into_inner();

    db::catalog::get_season(&pool, season_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Season"))?;

    let standings = db::standings::get_season_standings(&pool, season_id, query.round).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Standings", standings)))
}

#[tracing::instrument(name = "Upsert standing", skip(form, pool))]
pub async fn upsert_standing(
    form: web::Json<UpsertStandingRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    if form.round < 1 {
        return Err(ApiError::Validation("Round must be at least 1".into()));
    }
    if form.wins < 0 || form.draws < 0 || form.losses < 0 {
        return Err(ApiError::Validation("Counters cannot be negative".into()));
    }

    db::catalog::get_season(&pool, form.season_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Season"))?;
    db::catalog::get_team(&pool, form.team_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Team"))?;

    let standing = db::standings::upsert_standing(&pool, &form).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Standing recorded", standing)))
}
