//! Session-renewal core
//!
//! Recovery pipeline for expired-session failures:
//!
//! ```text
//! RequestExecutor ──failure──► SessionExpirySignal::classify
//!                                      │
//!                              SessionExpired (first attempt only)
//!                                      │
//!                              RenewalCoordinator ── driver ──► renewal call
//!                                      │                            │
//!                                   waiters ◄──── settle ───────────┘
//!                                      │
//!                                   replay (retried attempt, at most once)
//! ```
//!
//! The coordinator guarantees single-flight renewal: the `renewing` flag is
//! flipped inside the state lock before the driver ever awaits, so two
//! "first" failures can never both observe an idle coordinator.
//!
//! # Module Organization
//!
//! - **[`descriptor`]**: immutable request descriptions and per-attempt state
//! - **[`executor`]**: one logical request → normalized outcome
//! - **[`classifier`]**: expired-session signal matching
//! - **[`coordinator`]**: single-flight renewal with a FIFO waiter queue

pub mod classifier;
pub mod coordinator;
pub mod descriptor;
pub mod executor;

// Re-export commonly used types
pub use classifier::{Classification, SessionExpirySignal};
pub use coordinator::{LogSessionLost, RenewalCoordinator, RenewalTicket, SessionLostHook};
pub use descriptor::{Attempt, RequestDescriptor};
pub use executor::{RawResponse, RequestExecutor, RequestFailure};
