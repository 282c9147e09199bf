use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use validator::Validate;

use crate::auth::jwt::{issue_token_pair, verify_refresh_token, Claims};
use crate::config::jwt::JwtSettings;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::user::{
    AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegistrationRequest,
    UpdateProfileRequest,
};

#[tracing::instrument(
    name = "Register new user",
    skip(form, pool),
    fields(username = %form.username, email = %form.email)
)]
pub async fn register(
    form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;

    let password_hash =
        bcrypt::hash(form.password.expose_secret(), bcrypt::DEFAULT_COST).map_err(ApiError::internal)?;

    let user = db::users::create_user(
        &pool,
        &form.username,
        &form.email,
        &password_hash,
        form.full_name.as_deref(),
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            ApiError::Conflict("Username or email already taken".into())
        }
        other => other.into(),
    })?;

    tracing::info!("Registered user {}", user.username);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "User registered successfully",
        PublicUser::from(user),
    )))
}

#[tracing::instrument(name = "User login", skip(form, pool, jwt_settings), fields(username = %form.username))]
pub async fn login(
    form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    let user = db::users::get_user_by_username(&pool, &form.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid username or password".into()))?;

    let valid = bcrypt::verify(form.password.expose_secret(), &user.password_hash)
        .map_err(ApiError::internal)?;
    if !valid {
        return Err(ApiError::Unauthorized("Invalid username or password".into()));
    }

    let tokens = issue_token_pair(&user, &jwt_settings)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Login successful",
        AuthResponse {
            user: PublicUser::from(user),
            tokens,
        },
    )))
}

#[tracing::instrument(name = "Refresh token pair", skip(form, pool, jwt_settings))]
pub async fn refresh(
    form: web::Json<RefreshRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    let claims = verify_refresh_token(&form.refresh_token, &jwt_settings)?;
    let user_id = claims
        .user_id()
        .ok_or_else(|| ApiError::Unauthorized("Invalid refresh token".into()))?;

    // Re-read the user so a rotated role or deleted account invalidates the
    // refresh chain.
    let user = db::users::get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Account no longer exists".into()))?;

    let tokens = issue_token_pair(&user, &jwt_settings)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Token refreshed",
        AuthResponse {
            user: PublicUser::from(user),
            tokens,
        },
    )))
}

#[tracing::instrument(name = "Get current user", skip(pool, claims))]
pub async fn me(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims
        .user_id()
        .ok_or_else(|| ApiError::Unauthorized("Invalid token subject".into()))?;

    let user = db::users::get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Current user", PublicUser::from(user))))
}

#[tracing::instrument(name = "Update profile", skip(form, pool, claims))]
pub async fn update_profile(
    form: web::Json<UpdateProfileRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims
        .user_id()
        .ok_or_else(|| ApiError::Unauthorized("Invalid token subject".into()))?;

    let user = db::users::update_profile(
        &pool,
        user_id,
        form.full_name.as_deref(),
        form.avatar_url.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Profile updated", PublicUser::from(user))))
}
