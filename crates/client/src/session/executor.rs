//! Request executor
//!
//! Sends one logical request and normalizes the outcome. HTTP error statuses
//! are data here, not errors in the transport sense: they come back as a
//! [`RequestFailure`] carrying the status and the server's envelope message
//! so the classifier can inspect both uniformly.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use zapwallet_domain::types::envelope::ErrorEnvelope;
use zapwallet_domain::WalletError;

use super::descriptor::Attempt;
use crate::http::HttpClient;

/// Successful raw response: status plus the unparsed body text
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    body: String,
}

impl RawResponse {
    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, WalletError> {
        serde_json::from_str(&self.body)
            .map_err(|err| WalletError::Decode(format!("invalid response body: {err}")))
    }
}

/// Normalized failure descriptor for a single attempt
///
/// Carries everything the classifier needs: the transport status (absent for
/// connection-level failures), the server's envelope message, and the
/// already-normalized error to pass through when no recovery applies.
#[derive(Debug)]
pub struct RequestFailure {
    pub status: Option<StatusCode>,
    pub message: Option<String>,
    pub error: WalletError,
}

impl RequestFailure {
    fn transport(timeout_secs: u64, err: &reqwest::Error) -> Self {
        let error = if err.is_timeout() {
            WalletError::Timeout(timeout_secs)
        } else {
            WalletError::Network(err.to_string())
        };
        Self { status: None, message: None, error }
    }

    fn http(status: StatusCode, message: Option<String>) -> Self {
        let error = WalletError::Api {
            status: status.as_u16(),
            message: message.clone().unwrap_or_else(|| status.to_string()),
        };
        Self { status: Some(status), message, error }
    }
}

/// Sends one logical request against the configured base URL
///
/// Pure pass-through: no retries and no interpretation of failure semantics
/// at this layer.
#[derive(Clone)]
pub struct RequestExecutor {
    http: HttpClient,
    base_url: String,
    timeout_secs: u64,
}

impl RequestExecutor {
    #[must_use]
    pub fn new(http: HttpClient, base_url: String, timeout_secs: u64) -> Self {
        Self { http, base_url, timeout_secs }
    }

    /// Execute one attempt and normalize the outcome.
    pub async fn execute(&self, attempt: &Attempt<'_>) -> Result<RawResponse, RequestFailure> {
        let descriptor = attempt.descriptor();
        let url = format!("{}{}", self.base_url, descriptor.path());
        debug!(method = %descriptor.method(), %url, retried = attempt.retried(), "sending request");

        let mut builder = self.http.request(descriptor.method().clone(), &url);
        if !descriptor.query().is_empty() {
            builder = builder.query(descriptor.query());
        }
        for (name, value) in descriptor.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = descriptor.body() {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                debug!(%url, error = %err, "transport failure");
                return Err(RequestFailure::transport(self.timeout_secs, &err));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return Err(RequestFailure::transport(self.timeout_secs, &err)),
        };
        debug!(%url, %status, "received response");

        if status.is_success() {
            return Ok(RawResponse { status, body });
        }

        // Failed responses still carry the envelope; the message field is the
        // session-expiry signal.
        let message =
            serde_json::from_str::<ErrorEnvelope>(&body).ok().and_then(|envelope| envelope.message);
        Err(RequestFailure::http(status, message))
    }
}
