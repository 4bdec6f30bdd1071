//! The authentication service — register, login, refresh, validate, logout.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use gatehouse_core::error::{AppError, ErrorKind};
use gatehouse_entity::token::{RefreshRecord, TokenPair};
use gatehouse_entity::user::{NewUser, UserRole};

use crate::directory::UserDirectory;
use crate::jwt::{TokenIssuer, TokenKind, TokenVerifier};
use crate::password::PasswordHasher;
use crate::store::RefreshTokenStore;

/// Orchestrates the authentication and token lifecycle.
///
/// Holds no mutable state of its own beyond the read-only signing key
/// inside the issuer/verifier; every request is an independent unit of
/// work against the directory and the refresh-token store, so the service
/// is freely shareable across tasks.
#[derive(Clone)]
pub struct AuthService {
    /// Token issuance.
    issuer: Arc<TokenIssuer>,
    /// Token verification.
    verifier: Arc<TokenVerifier>,
    /// Refresh-token revocation ledger.
    store: RefreshTokenStore,
    /// External user directory.
    directory: Arc<dyn UserDirectory>,
    /// Password verification.
    hasher: PasswordHasher,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl AuthService {
    /// Creates a new service with all required collaborators.
    pub fn new(
        issuer: Arc<TokenIssuer>,
        verifier: Arc<TokenVerifier>,
        store: RefreshTokenStore,
        directory: Arc<dyn UserDirectory>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            issuer,
            verifier,
            store,
            directory,
            hasher,
        }
    }

    /// Registers a new account and logs it in.
    ///
    /// Account creation is delegated to the directory; on success the flow
    /// is exactly a login with the same credentials, so registration holds
    /// no state of its own.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, AppError> {
        let new_user = NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let user = self
            .directory
            .create_user(new_user)
            .await
            .map_err(|e| match e.kind {
                ErrorKind::UserCreation => e,
                _ => AppError::user_creation(format!("Couldn't create user: {e}")),
            })?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        self.login(email, password).await
    }

    /// Authenticates credentials and issues a token pair.
    ///
    /// Every successful login appends a new refresh record — multi-device
    /// sessions coexist, each independently revocable. Failures after the
    /// password check are surfaced, not retried: a retry could issue
    /// duplicate credentials without an idempotency key.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let user = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("No account for this email"))?;

        if !self.hasher.verify_password(password, &user.password_hash) {
            warn!(user_id = %user.id, "Login with incorrect password");
            return Err(AppError::incorrect_password("Incorrect password"));
        }

        let access_token = self
            .issuer
            .issue_access_token(user.id, user.role)
            .map_err(|e| AppError::token_issuance(format!("Couldn't issue access token: {e}")))?;

        let refresh_token = self
            .issuer
            .issue_refresh_token(user.id, user.role)
            .map_err(|e| AppError::token_issuance(format!("Couldn't issue refresh token: {e}")))?;

        let record = RefreshRecord::new(user.id, refresh_token.clone());
        self.store.save(&record).await?;

        info!(user_id = %user.id, record_id = %record.id, "Login successful");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Exchanges a valid refresh token for a new access token.
    ///
    /// Trusts the token's signature and expiry only; the refresh record is
    /// deliberately not consulted, so a token revoked by logout keeps
    /// working until natural expiry (the documented stale-revocation
    /// window). The presented refresh token is not rotated.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self
            .verifier
            .verify(refresh_token)
            .map_err(|e| AppError::invalid_refresh_token(format!("Invalid refresh token: {e}")))?;

        if claims.kind != TokenKind::Refresh {
            return Err(AppError::invalid_refresh_token(
                "Presented token is not a refresh token",
            ));
        }

        let access_token = self
            .issuer
            .issue_access_token(claims.sub, claims.role)
            .map_err(|e| AppError::token_issuance(format!("Couldn't issue access token: {e}")))?;

        info!(user_id = %claims.sub, "Access token refreshed");

        Ok(access_token)
    }

    /// Verifies any token and returns the embedded subject identity.
    ///
    /// Used by other services to authorize requests. Either kind is
    /// accepted; callers that require a specific kind enforce it.
    pub fn validate_token(&self, token: &str) -> Result<(Uuid, UserRole), AppError> {
        let claims = self
            .verifier
            .verify(token)
            .map_err(|e| AppError::invalid_token(format!("Couldn't validate token: {e}")))?;

        Ok((claims.sub, claims.role))
    }

    /// Revokes the session behind one refresh token.
    ///
    /// Logout on an already-revoked or never-issued token is an error, not
    /// a no-op. Other concurrent sessions of the same subject keep their
    /// records.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let record = self
            .store
            .find_by_value(refresh_token)
            .await
            .map_err(|e| match e.kind {
                ErrorKind::NotFound => {
                    AppError::session_not_found("No active session for this token")
                }
                _ => e,
            })?;

        let deleted = self
            .store
            .delete(record.id)
            .await
            .map_err(|e| AppError::revocation(format!("Couldn't revoke session: {e}")))?;

        if !deleted {
            // Lost a race with a concurrent logout of the same token; the
            // record is gone either way.
            warn!(record_id = %record.id, "Refresh record vanished before delete");
        }

        info!(user_id = %record.subject_id, record_id = %record.id, "Session revoked");

        Ok(())
    }
}
