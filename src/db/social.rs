use sqlx::PgPool;
use uuid::Uuid;

use crate::models::social::{
    Comment, CommentWithUser, CreatePostRequest, Like, Post, PostWithCounts, UpdatePostRequest,
};

pub async fn create_post(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreatePostRequest,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, user_id, title, content, image_url, match_id, team_id, player_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&req.title)
    .bind(&req.content)
    .bind(&req.image_url)
    .bind(req.match_id)
    .bind(req.team_id)
    .bind(req.player_id)
    .fetch_one(pool)
    .await
}

pub async fn get_post(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
        .bind(post_id)
        .fetch_optional(pool)
        .await
}

/// Newest-first feed with author info, like/comment counts and whether the
/// requesting user (if any) liked each post.
pub async fn get_feed(
    pool: &PgPool,
    current_user_id: Option<Uuid>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<PostWithCounts>, i64), sqlx::Error> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    let posts = sqlx::query_as::<_, PostWithCounts>(
        r#"
        SELECT p.id, p.user_id, u.username, u.avatar_url,
               p.title, p.content, p.image_url, p.match_id, p.team_id, p.player_id,
               COUNT(DISTINCT l.id) AS like_count,
               COUNT(DISTINCT c.id) AS comment_count,
               BOOL_OR(l.user_id = $1) IS TRUE AS is_liked,
               p.created_at, p.updated_at
        FROM posts p
        JOIN users u ON u.id = p.user_id
        LEFT JOIN likes l ON l.post_id = p.id
        LEFT JOIN comments c ON c.post_id = p.id
        GROUP BY p.id, u.username, u.avatar_url
        ORDER BY p.created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(current_user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok((posts, total))
}

pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    req: &UpdatePostRequest,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = COALESCE($2, title),
            content = COALESCE($3, content),
            image_url = COALESCE($4, image_url),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(post_id)
    .bind(&req.title)
    .bind(&req.content)
    .bind(&req.image_url)
    .fetch_one(pool)
    .await
}

pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn create_comment(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, user_id, post_id, content)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(post_id)
    .bind(content)
    .fetch_one(pool)
    .await
}

pub async fn get_comment(pool: &PgPool, comment_id: Uuid) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
        .bind(comment_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_post_comments(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Vec<CommentWithUser>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithUser>(
        r#"
        SELECT c.id, c.user_id, c.post_id, u.username, u.avatar_url,
               c.content, c.created_at, c.updated_at
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.post_id = $1
        ORDER BY c.created_at ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

pub async fn update_comment(
    pool: &PgPool,
    comment_id: Uuid,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET content = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(comment_id)
    .bind(content)
    .fetch_one(pool)
    .await
}

pub async fn delete_comment(pool: &PgPool, comment_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(comment_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn create_like(pool: &PgPool, user_id: Uuid, post_id: Uuid) -> Result<Like, sqlx::Error> {
    sqlx::query_as::<_, Like>(
        r#"
        INSERT INTO likes (id, user_id, post_id)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await
}

pub async fn delete_like(pool: &PgPool, user_id: Uuid, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND post_id = $2")
        .bind(user_id)
        .bind(post_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
