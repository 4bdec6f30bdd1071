//! The access/refresh token pair returned on login and registration.

use serde::{Deserialize, Serialize};

/// A pair of signed tokens handed to the caller.
///
/// Never persisted; the transport layer serializes it as plain JSON with
/// `access_token`/`refresh_token` fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}
