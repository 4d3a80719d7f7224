//! Authentication commands
//!
//! Login and logout work through cookie side effects: a successful login
//! response sets the access and refresh cookies on the shared jar, and
//! nothing here handles tokens directly. The renewal endpoint is not
//! exposed; it belongs to the session coordinator.

use std::sync::Arc;

use tracing::{info, instrument};
use zapwallet_domain::types::{LoginRequest, RegisterRequest, SendOtpRequest, VerifyOtpRequest};
use zapwallet_domain::types::user::User;
use zapwallet_domain::Result;

use crate::client::WalletClient;

/// Commands for `/auth`, `/otp`, and registration
pub struct AuthCommands {
    client: Arc<WalletClient>,
}

impl AuthCommands {
    /// Create a new commands instance.
    #[must_use]
    pub fn new(client: Arc<WalletClient>) -> Self {
        Self { client }
    }

    /// Log in with phone and PIN.
    ///
    /// On success the transport cookie jar now carries the session
    /// credentials; the returned profile is informational.
    ///
    /// # Errors
    /// Returns error if credentials are rejected or the request fails
    #[instrument(skip(self, request), fields(phone = %request.phone))]
    pub async fn login(&self, request: &LoginRequest) -> Result<User> {
        let user: User = self.client.post("/auth/login", request).await?;
        info!(user_id = %user.id, "logged in");
        Ok(user)
    }

    /// Register a new account.
    ///
    /// # Errors
    /// Returns error if validation fails or the request fails
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        self.client.post("/user/register", request).await
    }

    /// Log out, clearing the server-side session.
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        let _: Option<serde_json::Value> = self.client.post_empty("/auth/logout").await?;
        info!("logged out");
        Ok(())
    }

    /// Request an OTP for account verification.
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn send_otp(&self, request: &SendOtpRequest) -> Result<()> {
        let _: Option<serde_json::Value> = self.client.post("/otp/send", request).await?;
        Ok(())
    }

    /// Submit an OTP for verification.
    ///
    /// # Errors
    /// Returns error if the code is wrong or the request fails
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<()> {
        let _: Option<serde_json::Value> = self.client.post("/otp/verify", request).await?;
        Ok(())
    }
}
