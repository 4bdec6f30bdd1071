//! In-memory user directory using dashmap.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use gatehouse_core::error::AppError;
use gatehouse_core::result::AppResult;
use gatehouse_entity::user::{NewUser, User, UserRole};

use crate::password::PasswordHasher;

use super::UserDirectory;

/// In-memory user directory.
///
/// Hashes passwords before storing anything, enforces unique emails and a
/// minimum password length, and assigns the `user` role to every
/// self-registered account.
#[derive(Debug)]
pub struct MemoryUserDirectory {
    /// Accounts keyed by email.
    users: DashMap<String, User>,
    /// Password hasher for account creation.
    hasher: PasswordHasher,
    /// Minimum accepted password length.
    password_min_length: usize,
}

impl MemoryUserDirectory {
    /// Creates an empty directory with the given password policy.
    pub fn new(password_min_length: usize) -> Self {
        Self {
            users: DashMap::new(),
            hasher: PasswordHasher::new(),
            password_min_length,
        }
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        if new_user.username.trim().is_empty() {
            return Err(AppError::user_creation("Username cannot be empty"));
        }
        if new_user.password.len() < self.password_min_length {
            return Err(AppError::user_creation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        let password_hash = self.hasher.hash_password(&new_user.password)?;
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email.clone(),
            password_hash,
            role: UserRole::User,
            created_at: Utc::now(),
        };

        match self.users.entry(new_user.email) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(AppError::user_creation(
                "An account with this email already exists",
            )),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                info!(user_id = %user.id, username = %user.username, "User created");
                entry.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.get(email).map(|entry| entry.value().clone()))
    }
}
