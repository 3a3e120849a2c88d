//! Failure classification for completion calls.
//!
//! Every failed call is reduced to one [`FailureClass`]. The class is used for
//! log fields everywhere, and document Q&A additionally turns it into a
//! user-facing explanation.
//!
//! | Class | Trigger |
//! |-------|---------|
//! | `invalid_credential` | HTTP 401 / 403 |
//! | `rate_limited` | HTTP 429 |
//! | `server_error` | HTTP 5xx |
//! | `connectivity` | DNS, connect, TLS or timeout failure |
//! | `malformed_response` | 2xx body without `choices[0].message.content` |
//! | `other` | any other non-2xx status |
//!
//! ## Example
//!
//! ```rust
//! use chat_gateway::error_class::FailureClass;
//!
//! assert_eq!(FailureClass::from_status(429), FailureClass::RateLimited);
//! assert_eq!(FailureClass::from_status(502).name(), "server_error");
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// The endpoint rejected the bearer token.
    InvalidCredential,
    /// The endpoint is throttling this credential.
    RateLimited,
    /// Provider-side failure, usually temporary.
    ServerError,
    /// The request never produced an HTTP response.
    Connectivity,
    /// A success status with an unusable body.
    MalformedResponse,
    /// Anything else.
    Other,
}

impl FailureClass {
    /// Classify a non-success HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::InvalidCredential,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            _ => Self::Other,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidCredential => "invalid_credential",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Connectivity => "connectivity",
            Self::MalformedResponse => "malformed_response",
            Self::Other => "other",
        }
    }

    /// Whether waiting and trying again later is likely to help.
    ///
    /// The gateway never retries on its own; this only shapes the wording of
    /// degraded messages and log levels.
    #[inline]
    pub fn transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError | Self::Connectivity
        )
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
