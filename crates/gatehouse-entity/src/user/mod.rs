//! User entity and role types.

pub mod model;
pub mod role;

pub use model::{NewUser, User};
pub use role::UserRole;
