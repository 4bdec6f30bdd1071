//! In-memory refresh-token repository using dashmap.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use gatehouse_core::error::AppError;
use gatehouse_core::result::AppResult;
use gatehouse_entity::token::RefreshRecord;

use super::RefreshTokenRepository;

/// In-memory refresh-token repository.
///
/// Suitable for single-node deployments and tests. Every operation is a
/// single atomic map operation, so a cancelled caller never observes a
/// half-written record.
#[derive(Debug, Default)]
pub struct MemoryRefreshTokenRepository {
    /// Records keyed by record ID.
    records: DashMap<Uuid, RefreshRecord>,
    /// Token value → record ID index for logout lookups.
    by_token: DashMap<String, Uuid>,
}

impl MemoryRefreshTokenRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records. Used by monitoring and tests.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RefreshTokenRepository for MemoryRefreshTokenRepository {
    async fn save(&self, record: &RefreshRecord) -> AppResult<()> {
        // Claim the token index entry first; it doubles as the uniqueness
        // guard for the token value.
        match self.by_token.entry(record.token.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                return Err(AppError::persistence(
                    "A record for this token value already exists",
                ));
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(record.id);
            }
        }
        self.records.insert(record.id, record.clone());
        debug!(record_id = %record.id, subject_id = %record.subject_id, "Refresh record saved");
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshRecord>> {
        let Some(id) = self.by_token.get(token).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let Some((_, record)) = self.records.remove(&id) else {
            return Ok(false);
        };
        self.by_token.remove(&record.token);
        debug!(record_id = %id, "Refresh record deleted");
        Ok(true)
    }
}
