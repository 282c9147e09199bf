use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::config::jwt::JwtSettings;
use crate::errors::ApiError;
use crate::handlers::social_handler;
use crate::models::common::PaginationQuery;
use crate::models::social::{
    CreateCommentRequest, CreatePostRequest, UpdateCommentRequest, UpdatePostRequest,
};

/// Public feed with like/comment counts.
#[get("/posts")]
async fn get_feed(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    social_handler::get_feed(req, query, pool, jwt_settings).await
}

#[get("/posts/{post_id}/comments")]
async fn get_comments(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    social_handler::get_comments(path, pool).await
}

#[post("/posts")]
async fn create_post(
    form: web::Json<CreatePostRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    social_handler::create_post(form, pool, claims).await
}

#[put("/posts/{post_id}")]
async fn update_post(
    path: web::Path<Uuid>,
    form: web::Json<UpdatePostRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    social_handler::update_post(path, form, pool, claims).await
}

#[delete("/posts/{post_id}")]
async fn delete_post(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    social_handler::delete_post(path, pool, claims).await
}

#[post("/posts/{post_id}/comments")]
async fn create_comment(
    path: web::Path<Uuid>,
    form: web::Json<CreateCommentRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    social_handler::create_comment(path, form, pool, claims).await
}

#[put("/comments/{comment_id}")]
async fn update_comment(
    path: web::Path<Uuid>,
    form: web::Json<UpdateCommentRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    social_handler::update_comment(path, form, pool, claims).await
}

#[delete("/comments/{comment_id}")]
async fn delete_comment(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    social_handler::delete_comment(path, pool, claims).await
}

#[post("/posts/{post_id}/like")]
async fn like_post(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    social_handler::like_post(path, pool, claims).await
}

#[delete("/posts/{post_id}/like")]
async fn unlike_post(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    social_handler::unlike_post(path, pool, claims).await
}
