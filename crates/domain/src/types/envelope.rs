//! Response envelope
//!
//! Every ZapWallet endpoint wraps its payload in the same envelope; the
//! `message` field doubles as the session-expiry signal on failures.

use serde::{Deserialize, Serialize};

/// Standard response envelope returned by every ZapWallet endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub status_code: u16,
    pub success: bool,
    pub message: String,
    pub data: T,
}

/// Error body shape for failed responses
///
/// Failures omit `data`, so the success envelope cannot be reused to peel
/// the `message` out of an error payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
