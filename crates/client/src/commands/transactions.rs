//! Transaction history commands

use std::sync::Arc;

use tracing::instrument;
use zapwallet_domain::types::transaction::{TransactionPage, TransactionQuery};
use zapwallet_domain::Result;

use crate::client::WalletClient;

/// Commands for `/transactions` listings
pub struct TransactionCommands {
    client: Arc<WalletClient>,
}

impl TransactionCommands {
    /// Create a new commands instance.
    #[must_use]
    pub fn new(client: Arc<WalletClient>) -> Self {
        Self { client }
    }

    /// List the calling user's transactions, paginated.
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self, query), fields(page = query.page, limit = query.limit))]
    pub async fn my_transactions(&self, query: &TransactionQuery) -> Result<TransactionPage> {
        self.client.get_with_query("/transactions/my-transactions", query.to_pairs()).await
    }

    /// List every transaction in the system (admin), paginated.
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self, query), fields(page = query.page, limit = query.limit))]
    pub async fn all_transactions(&self, query: &TransactionQuery) -> Result<TransactionPage> {
        self.client.get_with_query("/transactions/all", query.to_pairs()).await
    }
}
