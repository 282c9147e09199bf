use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::errors::ApiError;
use crate::handlers::auth_handler;
use crate::models::user::{LoginRequest, RefreshRequest, RegistrationRequest};

#[post("/register")]
async fn register(
    form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    auth_handler::register(form, pool).await
}

#[post("/login")]
async fn login(
    form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    auth_handler::login(form, pool, jwt_settings).await
}

#[post("/refresh")]
async fn refresh(
    form: web::Json<RefreshRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    auth_handler::refresh(form, pool, jwt_settings).await
}
