//! Signed token creation with per-kind TTLs.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use gatehouse_core::config::auth::AuthConfig;
use gatehouse_core::error::AppError;
use gatehouse_entity::user::UserRole;

use super::claims::{Claims, TokenKind};

/// Issues signed access and refresh tokens.
///
/// Holds the process-wide HMAC signing key, loaded once from configuration
/// at startup. Issuance failures indicate a broken signing subsystem and
/// surface as [`gatehouse_core::ErrorKind::TokenIssuance`]; they are not
/// retried per request.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_minutes: config.jwt_access_ttl_minutes as i64,
            refresh_ttl_days: config.jwt_refresh_ttl_days as i64,
        }
    }

    /// Issues a short-lived access token for the given subject and role.
    pub fn issue_access_token(&self, subject_id: Uuid, role: UserRole) -> Result<String, AppError> {
        self.issue(
            subject_id,
            role,
            TokenKind::Access,
            chrono::Duration::minutes(self.access_ttl_minutes),
        )
    }

    /// Issues a long-lived refresh token for the given subject and role.
    pub fn issue_refresh_token(
        &self,
        subject_id: Uuid,
        role: UserRole,
    ) -> Result<String, AppError> {
        self.issue(
            subject_id,
            role,
            TokenKind::Refresh,
            chrono::Duration::days(self.refresh_ttl_days),
        )
    }

    fn issue(
        &self,
        subject_id: Uuid,
        role: UserRole,
        kind: TokenKind,
        ttl: chrono::Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject_id,
            role,
            kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::token_issuance(format!("Failed to sign token: {e}")))
    }
}
