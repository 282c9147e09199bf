use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::prediction_handler;
use crate::models::common::PaginationQuery;
use crate::models::prediction::{CreatePredictionRequest, UpdatePredictionRequest};

/// Everyone's predictions on a match, with owners hidden. Public.
#[get("/{match_id}")]
async fn match_predictions(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    prediction_handler::match_predictions(path, pool).await
}

/// Admin scoring trigger for a finished match.
#[post("/{match_id}")]
async fn calculate_points(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    prediction_handler::calculate_points(path, pool).await
}

#[post("")]
async fn create_prediction(
    form: web::Json<CreatePredictionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    prediction_handler::create_prediction(form, pool, claims).await
}

#[put("/{prediction_id}")]
async fn update_prediction(
    path: web::Path<Uuid>,
    form: web::Json<UpdatePredictionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    prediction_handler::update_prediction(path, form, pool, claims).await
}

#[delete("/{prediction_id}")]
async fn delete_prediction(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    prediction_handler::delete_prediction(path, pool, claims).await
}

#[get("/mine")]
async fn my_predictions(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    prediction_handler::my_predictions(query, pool, claims).await
}

#[get("/upcoming")]
async fn upcoming_predictions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    prediction_handler::upcoming_predictions(pool, claims).await
}

#[get("/check/{match_id}")]
async fn check_prediction(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    prediction_handler::check_prediction(path, pool, claims).await
}
