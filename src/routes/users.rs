use actix_web::{get, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::{auth_handler, user_handler};
use crate::models::user::{LeaderboardQuery, UpdateProfileRequest};

/// Current user's own profile.
#[get("")]
async fn me(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    auth_handler::me(pool, claims).await
}

#[put("")]
async fn update_profile(
    form: web::Json<UpdateProfileRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    auth_handler::update_profile(form, pool, claims).await
}

#[get("/users/leaderboard")]
async fn leaderboard(
    query: web::Query<LeaderboardQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    user_handler::leaderboard(query, pool).await
}

#[get("/users/{user_id}")]
async fn get_user(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    user_handler::get_user(path, pool).await
}

#[get("/users/{user_id}/achievements")]
async fn get_user_achievements(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    user_handler::get_user_achievements(path, pool).await
}
