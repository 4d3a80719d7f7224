//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ZapWallet client operations
///
/// Derives `Clone` because a single renewal failure must be fanned out to
/// every request queued behind the in-flight renewal call.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum WalletError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Session expired: {0}")]
    SessionExpired(String),

    #[error("Session renewal failed: {0}")]
    RenewalFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Timeout after {0}s")]
    Timeout(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Whether this error terminated the process-wide session.
    ///
    /// Callers seeing `true` should route the user back through the login
    /// flow; no further renewal will be attempted for this epoch.
    #[must_use]
    pub fn is_session_lost(&self) -> bool {
        matches!(self, Self::RenewalFailed(_))
    }
}

/// Result type alias for ZapWallet client operations
pub type Result<T> = std::result::Result<T, WalletError>;
