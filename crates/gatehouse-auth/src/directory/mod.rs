//! The user directory collaborator contract.
//!
//! Account storage and validation belong to a separate service; the
//! gateway only needs the two calls below. [`MemoryUserDirectory`] is the
//! bundled in-process backend and the test fake.

pub mod memory;

use async_trait::async_trait;

use gatehouse_core::result::AppResult;
use gatehouse_entity::user::{NewUser, User};

pub use memory::MemoryUserDirectory;

/// Contract for the external user directory service.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Creates a new account. Fails with a user-creation error on
    /// conflict or validation failure.
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Looks up an account by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}
