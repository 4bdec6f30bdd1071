//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::UserRole;

/// A registered account as exposed by the user directory.
///
/// The subject identity (`id`, `role`) is immutable once issued into a
/// token; the directory owns everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique, stable subject identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Email address, unique within the directory.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new account in the user directory.
///
/// The password travels as plaintext only as far as the directory, which
/// hashes it before storing anything.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password; never persisted.
    pub password: String,
}
