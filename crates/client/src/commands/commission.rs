//! Commission reporting commands

use std::sync::Arc;

use tracing::instrument;
use zapwallet_domain::constants::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};
use zapwallet_domain::types::commission::{CommissionPage, CommissionSummary};
use zapwallet_domain::Result;

use crate::client::WalletClient;

/// Commands for `/commission` reporting
pub struct CommissionCommands {
    client: Arc<WalletClient>,
}

impl CommissionCommands {
    /// Create a new commands instance.
    #[must_use]
    pub fn new(client: Arc<WalletClient>) -> Self {
        Self { client }
    }

    /// System-wide commission totals (admin).
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn admin_total(&self) -> Result<CommissionSummary> {
        self.client.get("/commission/admin/total").await
    }

    /// The calling agent's commission totals.
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn agent_total(&self) -> Result<CommissionSummary> {
        self.client.get("/commission/agent/total").await
    }

    /// System-wide commission-bearing transactions (admin), paginated.
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn admin_transactions(
        &self,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> Result<CommissionPage> {
        self.client
            .get_with_query("/commission/admin/transactions", page_query(page, limit))
            .await
    }

    /// The calling agent's commission-bearing transactions, paginated.
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn agent_transactions(
        &self,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> Result<CommissionPage> {
        self.client
            .get_with_query("/commission/agent/transactions", page_query(page, limit))
            .await
    }
}

fn page_query(page: Option<usize>, limit: Option<usize>) -> Vec<(String, String)> {
    vec![
        ("page".to_string(), page.unwrap_or(DEFAULT_PAGE).to_string()),
        ("limit".to_string(), limit.unwrap_or(DEFAULT_PAGE_LIMIT).to_string()),
    ]
}
