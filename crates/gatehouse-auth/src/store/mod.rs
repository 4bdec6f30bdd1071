//! The refresh-token revocation ledger.
//!
//! Persistence sits behind the [`RefreshTokenRepository`] trait so the
//! service can run against any backend; [`MemoryRefreshTokenRepository`]
//! is the bundled single-node backend and the test fake.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use gatehouse_core::error::AppError;
use gatehouse_core::result::AppResult;
use gatehouse_entity::token::RefreshRecord;

pub use memory::MemoryRefreshTokenRepository;

/// Persistence contract for refresh-token records.
///
/// Implementations must make each operation all-or-nothing: a request
/// cancelled mid-flight either persisted the record or left no trace.
/// Records are independent per issuance, so no cross-record locking is
/// required.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync + 'static {
    /// Inserts a new record.
    ///
    /// Must not silently overwrite an existing record for the same token
    /// value; doing so would collapse two sessions into one.
    async fn save(&self, record: &RefreshRecord) -> AppResult<()>;

    /// Looks up a record by its token value.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshRecord>>;

    /// Deletes a record by ID. Idempotent: returns `false` when the record
    /// was already absent, and errors only on storage failure.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Store wrapper mapping repository outcomes onto the gateway error
/// taxonomy.
#[derive(Clone)]
pub struct RefreshTokenStore {
    /// The backing repository.
    repo: Arc<dyn RefreshTokenRepository>,
}

impl std::fmt::Debug for RefreshTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenStore").finish()
    }
}

impl RefreshTokenStore {
    /// Creates a new store over the given repository.
    pub fn new(repo: Arc<dyn RefreshTokenRepository>) -> Self {
        Self { repo }
    }

    /// Persists a record for a freshly issued refresh token.
    pub async fn save(&self, record: &RefreshRecord) -> Result<(), AppError> {
        self.repo
            .save(record)
            .await
            .map_err(|e| AppError::persistence(format!("Failed to save refresh record: {e}")))
    }

    /// Finds the record for a presented refresh token value.
    ///
    /// Absence is a not-found error: a token without a record has already
    /// been revoked (or never existed).
    pub async fn find_by_value(&self, token: &str) -> Result<RefreshRecord, AppError> {
        self.repo
            .find_by_token(token)
            .await
            .map_err(|e| AppError::persistence(format!("Failed to look up refresh record: {e}")))?
            .ok_or_else(|| AppError::not_found("No refresh record for token"))
    }

    /// Deletes a record by ID. Returns whether a record was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| AppError::persistence(format!("Failed to delete refresh record: {e}")))
    }
}
