//! The persisted refresh-token record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row in the refresh-token revocation ledger.
///
/// One record exists per currently-valid refresh token; a subject with
/// several concurrent sessions holds several independent records. Deleting
/// the record revokes server-side trust for that one token. It does not
/// invalidate the token's signature, so stateless verification of the
/// token keeps succeeding until its natural expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRecord {
    /// Record identifier, used for deletion.
    pub id: Uuid,
    /// The subject this token was issued to.
    pub subject_id: Uuid,
    /// The refresh token value, used for lookup at logout.
    pub token: String,
    /// When the record was created (i.e. when the token was issued).
    pub created_at: DateTime<Utc>,
}

impl RefreshRecord {
    /// Create a new record for a freshly issued refresh token.
    pub fn new(subject_id: Uuid, token: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_id,
            token: token.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_records_are_independent() {
        let subject = Uuid::new_v4();
        let a = RefreshRecord::new(subject, "token-a");
        let b = RefreshRecord::new(subject, "token-b");
        assert_ne!(a.id, b.id);
        assert_eq!(a.subject_id, b.subject_id);
    }
}
