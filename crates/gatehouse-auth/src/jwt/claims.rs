//! JWT claims embedded in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gatehouse_entity::user::UserRole;

/// Claims payload embedded in every signed token.
///
/// The token is self-describing: everything verification needs (subject,
/// role, kind, expiry) travels inside the signed string, so access-token
/// checks never touch storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID the token was issued to.
    pub sub: Uuid,
    /// Role at the time of issuance; immutable for the token's lifetime.
    pub role: UserRole,
    /// Token kind: access or refresh.
    pub kind: TokenKind,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token ID; keeps two tokens minted in the same second distinct.
    pub jti: Uuid,
}

/// Distinguishes access tokens from refresh tokens.
///
/// Verification itself is kind-agnostic; operations that only trust one
/// kind (refresh) must check this tag explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Short-lived token authorizing individual requests.
    Access,
    /// Long-lived token exchanged for new access tokens.
    Refresh,
}

impl Claims {
    /// Returns the subject ID.
    pub fn subject_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
