//! Integration tests for the full authentication flow against the
//! in-memory backends.

use std::sync::Arc;

use uuid::Uuid;

use gatehouse_auth::directory::{MemoryUserDirectory, UserDirectory};
use gatehouse_auth::jwt::{TokenIssuer, TokenVerifier};
use gatehouse_auth::password::PasswordHasher;
use gatehouse_auth::service::AuthService;
use gatehouse_auth::store::{MemoryRefreshTokenRepository, RefreshTokenStore};
use gatehouse_core::config::auth::AuthConfig;
use gatehouse_core::error::ErrorKind;
use gatehouse_entity::user::UserRole;

/// Test fixture bundling the service with handles to its backends.
struct TestGateway {
    service: AuthService,
    directory: Arc<MemoryUserDirectory>,
    records: Arc<MemoryRefreshTokenRepository>,
    config: AuthConfig,
}

impl TestGateway {
    fn new() -> Self {
        let config = AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            ..AuthConfig::default()
        };

        let directory = Arc::new(MemoryUserDirectory::new(config.password_min_length));
        let records = Arc::new(MemoryRefreshTokenRepository::new());

        let service = AuthService::new(
            Arc::new(TokenIssuer::new(&config)),
            Arc::new(TokenVerifier::new(&config)),
            RefreshTokenStore::new(records.clone()),
            directory.clone(),
            PasswordHasher::new(),
        );

        Self {
            service,
            directory,
            records,
            config,
        }
    }
}

#[tokio::test]
async fn test_register_issues_tokens_and_validates() {
    let gw = TestGateway::new();

    let pair = gw
        .service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();

    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());

    let directory_user = gw
        .directory
        .find_by_email("alice@x.com")
        .await
        .unwrap()
        .unwrap();

    let (subject_id, role) = gw.service.validate_token(&pair.access_token).unwrap();
    assert_eq!(subject_id, directory_user.id);
    assert_eq!(role, UserRole::User);
}

#[tokio::test]
async fn test_register_duplicate_email_fails() {
    let gw = TestGateway::new();
    gw.service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();

    let err = gw
        .service
        .register("alice2", "alice@x.com", "Other456!")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UserCreation);
    // Only the first registration left a session behind.
    assert_eq!(gw.records.len(), 1);
}

#[tokio::test]
async fn test_login_unknown_email_issues_nothing() {
    let gw = TestGateway::new();

    let err = gw
        .service
        .login("nobody@x.com", "Secret123!")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(gw.records.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password_persists_nothing() {
    let gw = TestGateway::new();
    gw.service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();
    let before = gw.records.len();

    let err = gw
        .service
        .login("alice@x.com", "wrong-password")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::IncorrectPassword);
    assert_eq!(gw.records.len(), before);
}

#[tokio::test]
async fn test_refresh_yields_valid_access_token() {
    let gw = TestGateway::new();
    let pair = gw
        .service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();

    let access = gw.service.refresh(&pair.refresh_token).await.unwrap();
    assert_ne!(access, pair.access_token);

    let (subject_id, role) = gw.service.validate_token(&access).unwrap();
    let user = gw
        .directory
        .find_by_email("alice@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(subject_id, user.id);
    assert_eq!(role, user.role);
}

#[tokio::test]
async fn test_refresh_rejects_access_token_kind() {
    let gw = TestGateway::new();
    let pair = gw
        .service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();

    let err = gw.service.refresh(&pair.access_token).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidRefreshToken);
}

#[tokio::test]
async fn test_refresh_rejects_tampered_token() {
    let gw = TestGateway::new();
    let pair = gw
        .service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();

    let mut tampered = pair.refresh_token.clone();
    tampered.truncate(tampered.len() - 3);
    tampered.push_str("xyz");

    let err = gw.service.refresh(&tampered).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidRefreshToken);
}

#[tokio::test]
async fn test_refresh_rejects_expired_token() {
    let gw = TestGateway::new();

    // Hand-encode a refresh token that expired past the leeway window,
    // signed with the gateway's own secret.
    let now = chrono::Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": Uuid::new_v4(),
        "role": "user",
        "kind": "refresh",
        "iat": now - 600,
        "exp": now - 300,
        "jti": Uuid::new_v4(),
    });
    let expired = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(gw.config.jwt_secret.as_bytes()),
    )
    .unwrap();

    let err = gw.service.refresh(&expired).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidRefreshToken);

    let validate_err = gw.service.validate_token(&expired).unwrap_err();
    assert_eq!(validate_err.kind, ErrorKind::InvalidToken);
}

#[tokio::test]
async fn test_validate_accepts_both_kinds() {
    let gw = TestGateway::new();
    let pair = gw
        .service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();

    assert!(gw.service.validate_token(&pair.access_token).is_ok());
    assert!(gw.service.validate_token(&pair.refresh_token).is_ok());
}

#[tokio::test]
async fn test_logout_revokes_exactly_one_session() {
    let gw = TestGateway::new();
    gw.service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();

    // A second login from another device.
    let first = gw
        .service
        .login("alice@x.com", "Secret123!")
        .await
        .unwrap();
    let second = gw
        .service
        .login("alice@x.com", "Secret123!")
        .await
        .unwrap();
    assert_eq!(gw.records.len(), 3);

    gw.service.logout(&first.refresh_token).await.unwrap();
    assert_eq!(gw.records.len(), 2);

    // The other session's refresh still works.
    assert!(gw.service.refresh(&second.refresh_token).await.is_ok());
}

#[tokio::test]
async fn test_logout_twice_fails_with_session_not_found() {
    let gw = TestGateway::new();
    let pair = gw
        .service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();

    gw.service.logout(&pair.refresh_token).await.unwrap();

    let err = gw.service.logout(&pair.refresh_token).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::SessionNotFound);
}

#[tokio::test]
async fn test_logout_never_issued_token_fails() {
    let gw = TestGateway::new();

    let err = gw.service.logout("never-issued").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::SessionNotFound);
}

#[tokio::test]
async fn test_refresh_survives_logout_until_expiry() {
    // The documented stale-revocation window: refresh trusts signature
    // and expiry only, so a logged-out token keeps refreshing.
    let gw = TestGateway::new();
    let pair = gw
        .service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();

    gw.service.logout(&pair.refresh_token).await.unwrap();

    assert!(gw.service.refresh(&pair.refresh_token).await.is_ok());
}

#[tokio::test]
async fn test_concurrent_logins_same_user() {
    let gw = TestGateway::new();
    gw.service
        .register("alice", "alice@x.com", "Secret123!")
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = gw.service.clone();
        handles.push(tokio::spawn(async move {
            service.login("alice@x.com", "Secret123!").await
        }));
    }

    let mut refresh_tokens = Vec::new();
    for handle in handles {
        let pair = handle.await.unwrap().unwrap();
        refresh_tokens.push(pair.refresh_token);
    }

    // One record per login (plus the registration's own).
    assert_eq!(gw.records.len(), 9);

    // Every session is independently revocable.
    for token in &refresh_tokens {
        gw.service.logout(token).await.unwrap();
    }
    assert_eq!(gw.records.len(), 1);
}
