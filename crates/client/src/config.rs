//! Client configuration

use std::time::Duration;

use zapwallet_domain::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, RENEWAL_PATH};

use crate::session::classifier::SessionExpirySignal;

/// Configuration for [`crate::WalletClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API (e.g., "https://api.zapwallet.app/api/v1")
    pub base_url: String,
    /// Timeout applied to every request, renewal included
    pub timeout: Duration,
    /// Path of the renewal endpoint, relative to `base_url`
    pub renewal_path: String,
    /// Failure shape that triggers session renewal
    pub expiry_signal: SessionExpirySignal,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            renewal_path: RENEWAL_PATH.to_string(),
            expiry_signal: SessionExpirySignal::default(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointed at the given base URL, defaults elsewhere.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }
}
