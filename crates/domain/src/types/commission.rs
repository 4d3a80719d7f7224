//! Commission reporting types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

/// Aggregate commission totals for a reporting period
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSummary {
    pub total_commission: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_commission: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_admin_commission: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_count: Option<usize>,
}

/// Commission amounts attached to one transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionBreakdown {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub agent_commission: f64,
    pub super_admin_commission: f64,
    pub system_fee: f64,
    pub created_at: DateTime<Utc>,
}

/// One page of commission-bearing transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionPage {
    pub transactions: Vec<CommissionBreakdown>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}
