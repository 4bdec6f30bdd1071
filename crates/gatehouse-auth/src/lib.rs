//! # gatehouse-auth
//!
//! The authentication and token lifecycle core of the Gatehouse gateway.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `jwt` — stateless signed token issuance and verification
//! - `store` — the refresh-token revocation ledger behind a repository seam
//! - `directory` — the user directory collaborator contract
//! - `service` — the orchestrating [`AuthService`]
//!
//! Access tokens are short-lived and verified statelessly from their
//! signature and embedded claims. Refresh tokens are additionally recorded
//! in the [`store`], whose records are the sole server-side revocation
//! mechanism: logout deletes the record for one token and leaves any other
//! concurrent sessions of the same subject untouched.

pub mod directory;
pub mod jwt;
pub mod password;
pub mod service;
pub mod store;

pub use directory::{MemoryUserDirectory, UserDirectory};
pub use jwt::{Claims, TokenIssuer, TokenKind, TokenVerifier};
pub use password::PasswordHasher;
pub use service::AuthService;
pub use store::{MemoryRefreshTokenRepository, RefreshTokenRepository, RefreshTokenStore};
