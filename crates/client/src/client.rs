//! Wallet API client
//!
//! Public request surface plus the orchestration of the session-renewal
//! pipeline: execute, classify, coordinate, replay.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument};
use zapwallet_domain::types::envelope::ApiEnvelope;
use zapwallet_domain::{Result, WalletError};

use crate::config::ClientConfig;
use crate::http::HttpClient;
use crate::session::classifier::Classification;
use crate::session::coordinator::{
    LogSessionLost, RenewalCoordinator, RenewalTicket, SessionLostHook,
};
use crate::session::descriptor::{Attempt, RequestDescriptor};
use crate::session::executor::{RawResponse, RequestExecutor};

/// Authenticated client for the ZapWallet REST API
///
/// All typed helpers funnel through [`WalletClient::send`], which owns the
/// renewal pipeline. Cheap to share behind an [`Arc`]; the renewal state is
/// per-instance, so one client instance should serve the whole process.
pub struct WalletClient {
    executor: RequestExecutor,
    renewal: RenewalCoordinator,
    config: ClientConfig,
}

impl WalletClient {
    /// Create a client with the default session-lost hook (log only).
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder for fluent configuration.
    pub fn builder() -> WalletClientBuilder {
        WalletClientBuilder::default()
    }

    /// Get a reference to the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a GET request and unwrap the envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(RequestDescriptor::new(Method::GET, path)).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T> {
        self.send(RequestDescriptor::new(Method::GET, path).with_query(query)).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let body = serde_json::to_value(body)
            .map_err(|err| WalletError::Internal(format!("failed to serialize body: {err}")))?;
        self.send(RequestDescriptor::new(Method::POST, path).with_body(body)).await
    }

    /// Execute a POST request with no body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(RequestDescriptor::new(Method::POST, path)).await
    }

    /// Execute a PATCH request with a JSON body.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)
            .map_err(|err| WalletError::Internal(format!("failed to serialize body: {err}")))?;
        self.send(RequestDescriptor::new(Method::PATCH, path).with_body(body)).await
    }

    /// Execute a descriptor through the full renewal pipeline.
    ///
    /// On an expired-session failure the request either drives a renewal or
    /// queues behind the one in flight, then replays itself once renewal
    /// settles. Each descriptor is replayed at most once.
    #[instrument(skip(self, descriptor), fields(method = %descriptor.method(), path = %descriptor.path()))]
    pub async fn send<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> Result<T> {
        let attempt = Attempt::first(&descriptor);
        let failure = match self.executor.execute(&attempt).await {
            Ok(raw) => return unwrap_envelope(&raw),
            Err(failure) => failure,
        };

        match self.config.expiry_signal.classify(&failure, attempt.retried()) {
            Classification::Other => Err(failure.error),
            Classification::SessionExpired => {
                debug!("session expired; entering renewal");
                self.renew(&descriptor).await
            }
        }
    }

    /// Wait out (or drive) the renewal epoch, then replay the descriptor.
    async fn renew<T: DeserializeOwned>(&self, descriptor: &RequestDescriptor) -> Result<T> {
        match self.renewal.join() {
            RenewalTicket::Driver => {
                let outcome = self.call_renewal_endpoint().await;
                self.renewal.settle(outcome.clone()).await;
                outcome?;
            }
            RenewalTicket::Waiter(receiver) => {
                receiver
                    .await
                    .map_err(|_| {
                        WalletError::Internal("renewal epoch closed without settling".to_string())
                    })??;
            }
        }

        self.replay(descriptor).await
    }

    /// Invoke the renewal endpoint once.
    ///
    /// Credentials are ambient (refresh cookie in the jar) and the response
    /// body is ignored: a success means the backend refreshed the session
    /// cookie as a side effect. Failures are terminal for the epoch: never
    /// retried, never re-classified.
    async fn call_renewal_endpoint(&self) -> Result<()> {
        info!(path = %self.config.renewal_path, "renewing session");

        let descriptor = RequestDescriptor::new(Method::POST, &self.config.renewal_path);
        let attempt = Attempt::first(&descriptor);
        match self.executor.execute(&attempt).await {
            Ok(_) => {
                info!("session renewed");
                Ok(())
            }
            Err(failure) => Err(WalletError::RenewalFailed(failure.error.to_string())),
        }
    }

    /// Replay the original descriptor after a successful renewal.
    ///
    /// The attempt is marked retried, so whatever comes back (including a
    /// fresh expired-session failure) is returned to the caller unchanged.
    async fn replay<T: DeserializeOwned>(&self, descriptor: &RequestDescriptor) -> Result<T> {
        let attempt = Attempt::replay(descriptor);
        debug!(path = %descriptor.path(), "replaying request");

        match self.executor.execute(&attempt).await {
            Ok(raw) => unwrap_envelope(&raw),
            // A retried attempt can never classify as session-expired again,
            // so every failure here surfaces unchanged.
            Err(failure) => Err(failure.error),
        }
    }
}

fn unwrap_envelope<T: DeserializeOwned>(raw: &RawResponse) -> Result<T> {
    let envelope: ApiEnvelope<T> = raw.json()?;
    Ok(envelope.data)
}

/// Builder for [`WalletClient`]
#[derive(Default)]
pub struct WalletClientBuilder {
    config: Option<ClientConfig>,
    session_lost: Option<Arc<dyn SessionLostHook>>,
}

impl WalletClientBuilder {
    /// Set the client configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the base URL, keeping defaults elsewhere.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = Some(ClientConfig::with_base_url(base_url));
        self
    }

    /// Install the session-lost hook invoked on terminal renewal failure.
    #[must_use]
    pub fn session_lost_hook(mut self, hook: Arc<dyn SessionLostHook>) -> Self {
        self.session_lost = Some(hook);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn build(self) -> Result<WalletClient> {
        let config = self.config.unwrap_or_default();
        let hook = self.session_lost.unwrap_or_else(|| Arc::new(LogSessionLost));

        let http = HttpClient::builder().timeout(config.timeout).build()?;
        let executor =
            RequestExecutor::new(http, config.base_url.clone(), config.timeout.as_secs());

        Ok(WalletClient { executor, renewal: RenewalCoordinator::new(hook), config })
    }
}
