//! # gatehouse-entity
//!
//! Domain entities shared across the Gatehouse crates: user accounts and
//! roles, the persisted refresh-token record, and the token pair returned
//! to callers on login.

pub mod token;
pub mod user;

pub use token::{RefreshRecord, TokenPair};
pub use user::{NewUser, User, UserRole};
