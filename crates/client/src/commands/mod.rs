//! Typed endpoint commands
//!
//! High-level command interfaces over [`crate::WalletClient`], one module
//! per backend resource. These are thin: request/response typing and paths
//! only. Session renewal, classification, and replay all happen inside the
//! client they wrap.

pub mod auth;
pub mod commission;
pub mod transactions;
pub mod users;
pub mod wallet;

pub use auth::AuthCommands;
pub use commission::CommissionCommands;
pub use transactions::TransactionCommands;
pub use users::UserCommands;
pub use wallet::WalletCommands;
