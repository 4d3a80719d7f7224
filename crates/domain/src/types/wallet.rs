//! Wallet types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wallet lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletStatus {
    Active,
    Blocked,
}

/// Wallet record tied to a single user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning user id; some endpoints inline the full user object instead,
    /// in which case callers should fetch the profile separately.
    pub user: String,
    pub balance: f64,
    pub currency: String,
    pub wallet_status: WalletStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Money movement request between two wallets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub amount: f64,
    /// Receiver phone number for send-money / cash-in, agent phone for
    /// cash-out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TransferRequest {
    /// Transfer of `amount` to the wallet owned by `receiver_phone`.
    #[must_use]
    pub fn to_phone(amount: f64, receiver_phone: impl Into<String>) -> Self {
        Self { amount, receiver_phone: Some(receiver_phone.into()), description: None }
    }

    /// Transfer with no counterparty (add-money, withdraw).
    #[must_use]
    pub fn amount_only(amount: f64) -> Self {
        Self { amount, receiver_phone: None, description: None }
    }
}
