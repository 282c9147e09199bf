use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::achievement_handler;

#[get("/achievements")]
async fn list_achievements(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    achievement_handler::list_achievements(pool).await
}

/// Re-run the unlock check for a user.
#[post("/check/{user_id}")]
async fn check_achievements(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    achievement_handler::check_achievements(path, pool, claims).await
}
