use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::jwt::JwtSettings;
use crate::errors::ApiError;
use crate::models::user::{TokenPair, User, UserRole};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub role: UserRole,
    pub token_type: TokenType,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    /// Parse the user ID from the subject field. None if the UUID is invalid.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

fn issue_token(
    user: &User,
    token_type: TokenType,
    hours: i64,
    settings: &JwtSettings,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        role: user.role,
        token_type,
        exp: (now + Duration::hours(hours)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.expose_secret().as_bytes()),
    )
}

/// Issue a short-lived access token and a long-lived refresh token for a user.
pub fn issue_token_pair(user: &User, settings: &JwtSettings) -> Result<TokenPair, ApiError> {
    let access_token = issue_token(user, TokenType::Access, settings.expiration_hours, settings)
        .map_err(ApiError::internal)?;
    let refresh_token = issue_token(
        user,
        TokenType::Refresh,
        settings.refresh_expiration_hours,
        settings,
    )
    .map_err(ApiError::internal)?;

    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}

/// Decode a refresh token and return its claims. Rejects access tokens so a
/// leaked short-lived token cannot be used to mint new pairs.
pub fn verify_refresh_token(token: &str, settings: &JwtSettings) -> Result<Claims, ApiError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.secret.expose_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| ApiError::Unauthorized("Invalid refresh token".into()))?;

    if token_data.claims.token_type != TokenType::Refresh {
        return Err(ApiError::Unauthorized(
            "Token is not a refresh token".into(),
        ));
    }

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn settings() -> JwtSettings {
        JwtSettings::new("test-secret-that-is-long-enough".into(), 24, 720)
    }

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: "irrelevant".into(),
            full_name: None,
            avatar_url: None,
            role: UserRole::User,
            points: 0,
            correct_predictions: 0,
            total_predictions: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn refresh_token_round_trips() {
        let user = sample_user();
        let settings = settings();
        let pair = issue_token_pair(&user, &settings).unwrap();

        let claims = verify_refresh_token(&pair.refresh_token, &settings).unwrap();
        assert_eq!(claims.user_id(), Some(user.id));
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn access_token_is_rejected_as_refresh_token() {
        let user = sample_user();
        let settings = settings();
        let pair = issue_token_pair(&user, &settings).unwrap();

        let err = verify_refresh_token(&pair.access_token, &settings).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
