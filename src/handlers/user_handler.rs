use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::user::LeaderboardQuery;

#[tracing::instrument(name = "Get leaderboard", skip(pool, query))]
pub async fn leaderboard(
    query: web::Query<LeaderboardQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let limit = query.limit.unwrap_or(50).clamp(1, 200);
    let entries = db::users::get_leaderboard(&pool, limit).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Leaderboard", entries)))
}

#[tracing::instrument(name = "Get public profile", skip(pool))]
pub async fn get_user(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let user = db::users::get_public_user(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("User profile", user)))
}

#[tracing::instrument(name = "Get user achievements", skip(pool))]
pub async fn get_user_achievements(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    // 404 for unknown users rather than an empty list.
    db::users::get_public_user(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    let unlocked = db::achievements::get_user_achievements(&pool, user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("User achievements", unlocked)))
}
