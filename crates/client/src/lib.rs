//! # ZapWallet Client
//!
//! Authenticated HTTP client for the ZapWallet REST backend.
//!
//! The interesting part lives in [`session`]: every request that fails with
//! the backend's expired-session signal is routed through a single-flight
//! renewal coordinator. No matter how many requests observe the expiry
//! concurrently, exactly one `POST /auth/refresh-token` call goes out;
//! everyone else queues behind it and replays once it settles. A failed
//! renewal rejects the whole batch and notifies the session-lost hook once.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐
//! │  WalletClient  │  typed surface (get/post/patch + command modules)
//! └───────┬────────┘
//!         │
//!         ├──► RequestExecutor     (one logical request → raw outcome)
//!         ├──► SessionExpirySignal (failure classification)
//!         ├──► RenewalCoordinator  (single-flight renewal + waiter queue)
//!         │         │
//!         │         └──► SessionLostHook  (terminal-failure notification)
//!         └──► HttpClient          (reqwest wrapper, ambient cookie jar)
//! ```
//!
//! Credentials are ambient: the backend manages access via cookies, so the
//! transport carries a persistent cookie jar and renewal works as a cookie
//! side effect. The client never parses tokens out of responses.

pub mod client;
pub mod commands;
pub mod config;
pub mod http;
pub mod session;

// Re-export commonly used types
pub use client::{WalletClient, WalletClientBuilder};
pub use config::ClientConfig;
pub use session::classifier::{Classification, SessionExpirySignal};
pub use session::coordinator::{LogSessionLost, RenewalCoordinator, SessionLostHook};
pub use session::descriptor::RequestDescriptor;
pub use zapwallet_domain::{Result, WalletError};
