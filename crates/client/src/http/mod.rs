//! HTTP transport layer
//!
//! Thin wrapper over reqwest. Connection pooling, TLS, and the cookie jar
//! belong to reqwest; everything session-related lives in [`crate::session`].

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
