//! Wallet commands

use std::sync::Arc;

use tracing::{debug, instrument};
use zapwallet_domain::types::transaction::Transaction;
use zapwallet_domain::types::wallet::{TransferRequest, Wallet};
use zapwallet_domain::Result;

use crate::client::WalletClient;

/// Commands for `/wallet` operations
pub struct WalletCommands {
    client: Arc<WalletClient>,
}

impl WalletCommands {
    /// Create a new commands instance.
    #[must_use]
    pub fn new(client: Arc<WalletClient>) -> Self {
        Self { client }
    }

    /// Fetch the calling user's wallet.
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn my_wallet(&self) -> Result<Wallet> {
        self.client.get("/wallet/my-wallet").await
    }

    /// Agent top-up of a user wallet.
    ///
    /// # Errors
    /// Returns error if the transfer is rejected or the request fails
    #[instrument(skip(self, request), fields(amount = request.amount))]
    pub async fn add_money(&self, request: &TransferRequest) -> Result<Transaction> {
        self.transfer("/wallet/add-money", request).await
    }

    /// Agent cash-in to a user wallet.
    ///
    /// # Errors
    /// Returns error if the transfer is rejected or the request fails
    #[instrument(skip(self, request), fields(amount = request.amount))]
    pub async fn cash_in(&self, request: &TransferRequest) -> Result<Transaction> {
        self.transfer("/wallet/cash-in", request).await
    }

    /// User-to-user transfer.
    ///
    /// # Errors
    /// Returns error if the transfer is rejected or the request fails
    #[instrument(skip(self, request), fields(amount = request.amount))]
    pub async fn send_money(&self, request: &TransferRequest) -> Result<Transaction> {
        self.transfer("/wallet/send-money", request).await
    }

    /// User cash-out through an agent.
    ///
    /// # Errors
    /// Returns error if the transfer is rejected or the request fails
    #[instrument(skip(self, request), fields(amount = request.amount))]
    pub async fn cash_out(&self, request: &TransferRequest) -> Result<Transaction> {
        self.transfer("/wallet/cash-out", request).await
    }

    /// Agent withdrawal to the system.
    ///
    /// # Errors
    /// Returns error if the transfer is rejected or the request fails
    #[instrument(skip(self, request), fields(amount = request.amount))]
    pub async fn withdraw(&self, request: &TransferRequest) -> Result<Transaction> {
        self.transfer("/wallet/withdraw", request).await
    }

    async fn transfer(&self, path: &str, request: &TransferRequest) -> Result<Transaction> {
        let transaction: Transaction = self.client.post(path, request).await?;
        debug!(transaction_id = %transaction.id, "transfer recorded");
        Ok(transaction)
    }
}
