use std::fmt;

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub points: i32,
    pub correct_predictions: i32,
    pub total_predictions: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::User => write!(f, "user"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// Aggregate prediction counters carried on the user row. These are
/// incrementally maintained by the scoring and achievement services.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, Copy)]
pub struct UserStats {
    pub points: i32,
    pub correct_predictions: i32,
    pub total_predictions: i32,
}

/// Public view of a user, safe to return to other users (no email).
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub points: i32,
    pub correct_predictions: i32,
    pub total_predictions: i32,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub points: i32,
    pub correct_predictions: i32,
    pub total_predictions: i32,
    pub rank: i64,
}

#[derive(Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(deserialize_with = "deserialize_secret_string")]
    pub password: SecretString,
    pub full_name: Option<String>,
}

impl fmt::Display for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username: {}, Email: {}", self.username, self.email)
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(deserialize_with = "deserialize_secret_string")]
    pub password: SecretString,
}

#[derive(Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
}

pub fn deserialize_secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(SecretString::new(s.into_boxed_str()))
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            avatar_url: user.avatar_url,
            points: user.points,
            correct_predictions: user.correct_predictions,
            total_predictions: user.total_predictions,
        }
    }
}
