use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::achievement::CreateAchievementRequest;
use crate::models::common::ApiResponse;
use crate::models::user::UserRole;
use crate::services::AchievementService;

#[tracing::instrument(name = "List achievements", skip(pool))]
pub async fn list_achievements(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let achievements = db::achievements::get_all_achievements(&pool).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Achievements", achievements)))
}

#[tracing::instrument(name = "Create achievement", skip(form, pool))]
pub async fn create_achievement(
    form: web::Json<CreateAchievementRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;

    if form.condition_value <= 0 {
        return Err(ApiError::Validation(
            "Condition value must be positive".into(),
        ));
    }

    let achievement = db::achievements::create_achievement(&pool, &form).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Achievement created", achievement)))
}

#[tracing::instrument(name = "Delete achievement", skip(pool))]
pub async fn delete_achievement(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let achievement_id = path.into_inner();

    if !db::achievements::delete_achievement(&pool, achievement_id).await? {
        return Err(ApiError::not_found("Achievement"));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Achievement deleted")))
}

/// Re-evaluate the achievement catalog for a user. Users can trigger it for
/// themselves; admins for anyone.
#[tracing::instrument(name = "Check achievements", skip(pool, claims))]
pub async fn check_achievements(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let target_user = path.into_inner();

    let caller = claims
        .user_id()
        .ok_or_else(|| ApiError::Unauthorized("Invalid token subject".into()))?;
    if caller != target_user && claims.role != UserRole::Admin {
        return Err(ApiError::Forbidden(
            "You can only check your own achievements".into(),
        ));
    }

    let unlocked = AchievementService::new(pool.get_ref().clone())
        .check_and_unlock(target_user)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Newly unlocked achievements", unlocked)))
}
