//! Stateless signed token issuance and verification.

pub mod claims;
pub mod issuer;
pub mod verifier;

pub use claims::{Claims, TokenKind};
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;
