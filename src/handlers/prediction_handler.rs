use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::{ApiResponse, Paginated, PaginationQuery};
use crate::models::matches::MatchStatus;
use crate::models::prediction::{
    AnonymousPrediction, CreatePredictionRequest, PredictionCheckResponse, UpdatePredictionRequest,
};
use crate::services::{AchievementService, ScoringService};

fn claims_user_id(claims: &Claims) -> Result<Uuid, ApiError> {
    claims
        .user_id()
        .ok_or_else(|| ApiError::Unauthorized("Invalid token subject".into()))
}

/// Predictions are open only while the match is still scheduled.
async fn ensure_predictions_open(pool: &PgPool, match_id: Uuid) -> Result<(), ApiError> {
    let match_row = db::matches::get_match(pool, match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Match"))?;

    if match_row.status != MatchStatus::Scheduled {
        return Err(ApiError::Conflict(
            "Predictions are closed for this match".into(),
        ));
    }
    Ok(())
}

#[tracing::instrument(name = "Create prediction", skip(form, pool, claims))]
pub async fn create_prediction(
    form: web::Json<CreatePredictionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;
    let user_id = claims_user_id(&claims)?;

    ensure_predictions_open(&pool, form.match_id).await?;

    if db::predictions::get_user_match_prediction(&pool, user_id, form.match_id)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "You have already predicted this match".into(),
        ));
    }

    // The unique index settles the race if two requests pass the check above.
    let prediction = db::predictions::create_prediction(&pool, user_id, &form)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ApiError::Conflict("You have already predicted this match".into())
            }
            other => other.into(),
        })?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Prediction created", prediction)))
}

#[tracing::instrument(name = "Update prediction", skip(form, pool, claims))]
pub async fn update_prediction(
    path: web::Path<Uuid>,
    form: web::Json<UpdatePredictionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;
    let user_id = claims_user_id(&claims)?;
    let prediction_id = path.into_inner();

    let existing = db::predictions::get_prediction(&pool, prediction_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Prediction"))?;
    if existing.user_id != user_id {
        return Err(ApiError::Forbidden(
            "You can only modify your own predictions".into(),
        ));
    }

    ensure_predictions_open(&pool, existing.match_id).await?;

    let prediction = db::predictions::update_prediction(&pool, prediction_id, &form).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Prediction updated", prediction)))
}

#[tracing::instrument(name = "Delete prediction", skip(pool, claims))]
pub async fn delete_prediction(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;
    let prediction_id = path.into_inner();

    let existing = db::predictions::get_prediction(&pool, prediction_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Prediction"))?;
    if existing.user_id != user_id {
        return Err(ApiError::Forbidden(
            "You can only delete your own predictions".into(),
        ));
    }

    ensure_predictions_open(&pool, existing.match_id).await?;

    db::predictions::delete_prediction(&pool, prediction_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Prediction deleted")))
}

#[tracing::instrument(name = "List own predictions", skip(pool, claims, query))]
pub async fn my_predictions(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;

    let (predictions, total) =
        db::predictions::get_user_predictions(&pool, user_id, query.per_page(), query.offset())
            .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Your predictions",
        Paginated::new(predictions, total, query.page(), query.per_page()),
    )))
}

#[tracing::instrument(name = "List own upcoming predictions", skip(pool, claims))]
pub async fn upcoming_predictions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;

    let predictions = db::predictions::get_user_upcoming_predictions(&pool, user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Upcoming predictions", predictions)))
}

#[tracing::instrument(name = "Check prediction for match", skip(pool, claims))]
pub async fn check_prediction(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;
    let match_id = path.into_inner();

    let prediction = db::predictions::get_user_match_prediction(&pool, user_id, match_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Prediction check",
        PredictionCheckResponse {
            has_predicted: prediction.is_some(),
            prediction,
        },
    )))
}

/// Public view of everyone's predictions on one match, owners hidden.
#[tracing::instrument(name = "List match predictions", skip(pool))]
pub async fn match_predictions(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let match_id = path.into_inner();

    db::matches::get_match(&pool, match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Match"))?;

    let predictions: Vec<AnonymousPrediction> =
        db::predictions::get_match_predictions(&pool, match_id)
            .await?
            .into_iter()
            .map(AnonymousPrediction::from)
            .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success("Match predictions", predictions)))
}

/// Admin scoring trigger. Scores every pending prediction on a finished
/// match, then re-evaluates achievements for each affected user.
#[tracing::instrument(name = "Score match", skip(pool))]
pub async fn calculate_points(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let match_id = path.into_inner();

    let affected_users: Vec<Uuid> = db::predictions::get_match_predictions(&pool, match_id)
        .await?
        .into_iter()
        .map(|p| p.user_id)
        .collect();

    let summary = ScoringService::new(pool.get_ref().clone())
        .score_match(match_id)
        .await?;

    let achievements = AchievementService::new(pool.get_ref().clone());
    for user_id in affected_users {
        achievements.check_and_unlock(user_id).await?;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success("Predictions scored", summary)))
}
