//! Transaction history types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};

/// Kind of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    CashOut,
    CashIn,
    SendMoney,
    Withdraw,
    AddMoney,
}

/// Settlement state of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

/// Which role initiated the transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InitiatedBy {
    User,
    Agent,
    Admin,
    SuperAdmin,
}

/// Counterparty summary embedded in a transaction record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Commission split recorded against a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSplit {
    pub agent_commission: f64,
    pub super_admin_commission: f64,
    pub system_fee: f64,
}

/// One ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    /// Sender; absent for system-initiated credits.
    pub from: Option<Party>,
    /// Receiver; absent for withdrawals out of the system.
    pub to: Option<Party>,
    pub from_wallet: String,
    pub to_wallet: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub initiated_by: InitiatedBy,
    pub status: TransactionStatus,
    pub commission: CommissionSplit,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of transaction history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// Query parameters for transaction listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    pub tx_type: Option<TransactionType>,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_PAGE_LIMIT, tx_type: None }
    }
}

impl TransactionQuery {
    /// Query for the given page with the default page size.
    #[must_use]
    pub fn page(page: usize) -> Self {
        Self { page, ..Self::default() }
    }

    /// Render as query-string pairs for the request descriptor.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(tx_type) = self.tx_type {
            // serde renders the SCREAMING_SNAKE_CASE name with quotes; strip them
            let rendered = serde_json::to_string(&tx_type).unwrap_or_default();
            pairs.push(("type".to_string(), rendered.trim_matches('"').to_string()));
        }
        pairs
    }
}
