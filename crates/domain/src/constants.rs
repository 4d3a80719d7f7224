//! Domain constants
//!
//! Centralized location for endpoint paths and protocol-level constants
//! shared between the client and its tests.

// API configuration
pub const DEFAULT_BASE_URL: &str = "https://api.zapwallet.app/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Session renewal
pub const RENEWAL_PATH: &str = "/auth/refresh-token";

// The backend surfaces an expired access token as a 500 whose envelope
// message is exactly this string. Anything else is not renewable.
pub const SESSION_EXPIRED_STATUS: u16 = 500;
pub const SESSION_EXPIRED_MESSAGE: &str = "jwt expired";

// Pagination defaults
pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_LIMIT: usize = 10;
