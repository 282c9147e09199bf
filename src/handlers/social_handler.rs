use actix_web::{http::header, web, HttpRequest, HttpResponse};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::{Claims, TokenType};
use crate::config::jwt::JwtSettings;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::{ApiResponse, Paginated, PaginationQuery};
use crate::models::social::{CreateCommentRequest, CreatePostRequest, UpdateCommentRequest, UpdatePostRequest};
use crate::models::user::UserRole;

fn claims_user_id(claims: &Claims) -> Result<Uuid, ApiError> {
    claims
        .user_id()
        .ok_or_else(|| ApiError::Unauthorized("Invalid token subject".into()))
}

/// Best-effort identification on a public route. An invalid or missing
/// token just means the anonymous view; it is never an error here.
fn optional_user_id(req: &HttpRequest, jwt_settings: &JwtSettings) -> Option<Uuid> {
    let header_value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header_value.strip_prefix("Bearer ")?;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .ok()?;

    if token_data.claims.token_type != TokenType::Access {
        return None;
    }
    token_data.claims.user_id()
}

/// The feed is public; a bearer token only adds the per-post `is_liked`
/// flag.
#[tracing::instrument(name = "Get feed", skip(req, pool, query, jwt_settings))]
pub async fn get_feed(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    let current_user = optional_user_id(&req, &jwt_settings);

    let (posts, total) =
        db::social::get_feed(&pool, current_user, query.per_page(), query.offset()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Feed",
        Paginated::new(posts, total, query.page(), query.per_page()),
    )))
}

#[tracing::instrument(name = "Create post", skip(form, pool, claims))]
pub async fn create_post(
    form: web::Json<CreatePostRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;

    if form.title.as_deref().unwrap_or("").trim().is_empty()
        && form.content.as_deref().unwrap_or("").trim().is_empty()
    {
        return Err(ApiError::Validation(
            "A post needs a title or some content".into(),
        ));
    }

    let post = db::social::create_post(&pool, user_id, &form).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Post created", post)))
}

#[tracing::instrument(name = "Update post", skip(form, pool, claims))]
pub async fn update_post(
    path: web::Path<Uuid>,
    form: web::Json<UpdatePostRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;
    let post_id = path.into_inner();

    let existing = db::social::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post"))?;
    if existing.user_id != user_id {
        return Err(ApiError::Forbidden("You can only edit your own posts".into()));
    }

    let post = db::social::update_post(&pool, post_id, &form).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Post updated", post)))
}

#[tracing::instrument(name = "Delete post", skip(pool, claims))]
pub async fn delete_post(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;
    let post_id = path.into_inner();

    let existing = db::social::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post"))?;
    if existing.user_id != user_id && claims.role != UserRole::Admin {
        return Err(ApiError::Forbidden(
            "You can only delete your own posts".into(),
        ));
    }

    db::social::delete_post(&pool, post_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Post deleted")))
}

#[tracing::instrument(name = "List post comments", skip(pool))]
pub async fn get_comments(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();

    db::social::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post"))?;

    let comments = db::social::get_post_comments(&pool, post_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Comments", comments)))
}

#[tracing::instrument(name = "Create comment", skip(form, pool, claims))]
pub async fn create_comment(
    path: web::Path<Uuid>,
    form: web::Json<CreateCommentRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;
    let post_id = path.into_inner();

    if form.content.trim().is_empty() {
        return Err(ApiError::Validation("Comment cannot be empty".into()));
    }

    db::social::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post"))?;

    let comment = db::social::create_comment(&pool, user_id, post_id, &form.content).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Comment created", comment)))
}

#[tracing::instrument(name = "Update comment", skip(form, pool, claims))]
pub async fn update_comment(
    path: web::Path<Uuid>,
    form: web::Json<UpdateCommentRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;
    let comment_id = path.into_inner();

    if form.content.trim().is_empty() {
        return Err(ApiError::Validation("Comment cannot be empty".into()));
    }

    let existing = db::social::get_comment(&pool, comment_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Comment"))?;
    if existing.user_id != user_id {
        return Err(ApiError::Forbidden(
            "You can only edit your own comments".into(),
        ));
    }

    let comment = db::social::update_comment(&pool, comment_id, &form.content).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Comment updated", comment)))
}

#[tracing::instrument(name = "Delete comment", skip(pool, claims))]
pub async fn delete_comment(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;
    let comment_id = path.into_inner();

    let existing = db::social::get_comment(&pool, comment_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Comment"))?;
    if existing.user_id != user_id && claims.role != UserRole::Admin {
        return Err(ApiError::Forbidden(
            "You can only delete your own comments".into(),
        ));
    }

    db::social::delete_comment(&pool, comment_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Comment deleted")))
}

#[tracing::instrument(name = "Like post", skip(pool, claims))]
pub async fn like_post(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;
    let post_id = path.into_inner();

    db::social::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post"))?;

    let like = db::social::create_like(&pool, user_id, post_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ApiError::Conflict("You already liked this post".into())
            }
            other => other.into(),
        })?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Post liked", like)))
}

#[tracing::instrument(name = "Unlike post", skip(pool, claims))]
pub async fn unlike_post(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims_user_id(&claims)?;
    let post_id = path.into_inner();

    if !db::social::delete_like(&pool, user_id, post_id).await? {
        return Err(ApiError::not_found("Like"));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Post unliked")))
}
