//! Failure classification
//!
//! Decides whether a failed attempt is a recoverable expired-session fault
//! or anything else. Classification is deliberately conservative: the status
//! AND the exact message must match, and only on a first attempt. A looser
//! match would retry non-renewable errors forever; a stricter one would
//! leave recoverable failures unhandled.

use reqwest::StatusCode;
use zapwallet_domain::constants::{SESSION_EXPIRED_MESSAGE, SESSION_EXPIRED_STATUS};

use super::executor::RequestFailure;

/// Outcome of classifying a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Credential is stale but renewable; route through the coordinator.
    SessionExpired,
    /// Everything else; returned to the caller unchanged.
    Other,
}

/// The exact failure shape the backend emits for a stale access token
///
/// The backend reports an expired JWT as a 500 whose envelope message is
/// `"jwt expired"`. Both halves of the signal are configurable so a
/// deployment can re-point them, but matching stays exact: there is no
/// pattern or multi-signal support.
#[derive(Debug, Clone)]
pub struct SessionExpirySignal {
    pub status: StatusCode,
    pub message: String,
}

impl Default for SessionExpirySignal {
    fn default() -> Self {
        Self {
            status: StatusCode::from_u16(SESSION_EXPIRED_STATUS)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: SESSION_EXPIRED_MESSAGE.to_string(),
        }
    }
}

impl SessionExpirySignal {
    /// Classify a failed attempt.
    ///
    /// `SessionExpired` requires all three: matching status, matching
    /// envelope message, and a first (non-replayed) attempt. An
    /// expired-looking failure on an already-replayed attempt is terminal,
    /// which is what bounds each logical request to a single renewal cycle.
    #[must_use]
    pub fn classify(&self, failure: &RequestFailure, retried: bool) -> Classification {
        if retried {
            return Classification::Other;
        }

        let status_matches = failure.status == Some(self.status);
        let message_matches = failure.message.as_deref() == Some(self.message.as_str());

        if status_matches && message_matches {
            Classification::SessionExpired
        } else {
            Classification::Other
        }
    }
}
