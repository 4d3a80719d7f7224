//! Domain types and models
//!
//! Wire-level types for the ZapWallet REST API. Field names follow the
//! backend's JSON (camelCase, MongoDB `_id` keys) via serde renames.

pub mod auth;
pub mod commission;
pub mod envelope;
pub mod transaction;
pub mod user;
pub mod wallet;

// Re-export commonly used types for convenience
pub use auth::{ChangeStatusRequest, LoginRequest, RegisterRequest, SendOtpRequest, VerifyOtpRequest};
pub use commission::{CommissionBreakdown, CommissionPage, CommissionSummary};
pub use envelope::ApiEnvelope;
pub use transaction::{InitiatedBy, Transaction, TransactionPage, TransactionQuery, TransactionStatus, TransactionType};
pub use user::{ActivityStatus, AgentInfo, ApprovalStatus, Role, User};
pub use wallet::{TransferRequest, Wallet, WalletStatus};
