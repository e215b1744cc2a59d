//! 提供方错误分类：把 HTTP 状态码与响应体映射为有限的错误种类。
//!
//! Provider error taxonomy.
//!
//! A failed provider response is opaque: an HTTP status plus a body of text.
//! This module turns that pair into a [`ProviderErrorKind`] callers can branch
//! on, e.g. retry on [`ProviderErrorKind::RateLimitExceeded`] but fail fast on
//! [`ProviderErrorKind::IncorrectApiKey`].
//!
//! | Status | Body contains                               | Kind                       |
//! |--------|---------------------------------------------|----------------------------|
//! | 401    | `Incorrect API key`                         | `IncorrectApiKey`          |
//! | 401    | `You must be a member of an organization`   | `NoOrganizationMembership` |
//! | 401    | anything else                               | `InvalidAuthentication`    |
//! | 429    | `exceeded your current quota`               | `QuotaExceeded`            |
//! | 429    | anything else                               | `RateLimitExceeded`        |
//! | 500    |                                             | `ServerError`              |
//! | 503    |                                             | `EngineOverloaded`         |
//! | other  |                                             | `UnknownError`             |
//!
//! ## Example
//!
//! ```rust
//! use ai_lib_lite::error_code::ProviderErrorKind;
//!
//! let kind = ProviderErrorKind::classify(429, "You have exceeded your current quota");
//! assert_eq!(kind, ProviderErrorKind::QuotaExceeded);
//! assert!(!kind.retryable());
//! ```

use std::fmt;

const INCORRECT_API_KEY_MARKER: &str = "Incorrect API key";
const NO_ORGANIZATION_MARKER: &str = "You must be a member of an organization";
const QUOTA_EXCEEDED_MARKER: &str = "exceeded your current quota";

/// Symbolic classification of a non-success provider response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    /// 401 with no more specific marker in the body
    InvalidAuthentication,
    /// 401: the key was rejected outright
    IncorrectApiKey,
    /// 401: the key is not attached to an organization
    NoOrganizationMembership,
    /// 429: request rate limit
    RateLimitExceeded,
    /// 429: billing quota exhausted
    QuotaExceeded,
    /// 500
    ServerError,
    /// 503
    EngineOverloaded,
    /// Any status without a dedicated mapping
    UnknownError,
}

impl ProviderErrorKind {
    /// Classify a failed response. Pure function of its inputs.
    pub fn classify(status: u16, body: &str) -> Self {
        match status {
            401 if body.contains(INCORRECT_API_KEY_MARKER) => Self::IncorrectApiKey,
            401 if body.contains(NO_ORGANIZATION_MARKER) => Self::NoOrganizationMembership,
            401 => Self::InvalidAuthentication,
            429 if body.contains(QUOTA_EXCEEDED_MARKER) => Self::QuotaExceeded,
            429 => Self::RateLimitExceeded,
            500 => Self::ServerError,
            503 => Self::EngineOverloaded,
            _ => Self::UnknownError,
        }
    }

    /// Stable identifier (e.g. `"quota_exceeded"`), suitable for log fields.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidAuthentication => "invalid_authentication",
            Self::IncorrectApiKey => "incorrect_api_key",
            Self::NoOrganizationMembership => "no_organization_membership",
            Self::RateLimitExceeded => "rate_limit_exceeded",
            Self::QuotaExceeded => "quota_exceeded",
            Self::ServerError => "server_error",
            Self::EngineOverloaded => "engine_overloaded",
            Self::UnknownError => "unknown_error",
        }
    }

    /// Human-readable summary used in the rendered error message.
    #[inline]
    pub fn summary(&self) -> &'static str {
        match self {
            Self::InvalidAuthentication => "Invalid Authentication",
            Self::IncorrectApiKey => "Incorrect API key provided",
            Self::NoOrganizationMembership => {
                "You must be a member of an organization to use the API"
            }
            Self::RateLimitExceeded => "Rate limit reached for requests",
            Self::QuotaExceeded => {
                "You exceeded your current quota, please check your plan and billing details"
            }
            Self::ServerError => "The server had an error while processing your request",
            Self::EngineOverloaded => "The engine is currently overloaded, please try again later",
            Self::UnknownError => "Unknown error",
        }
    }

    /// Whether the same request may succeed if sent again later.
    ///
    /// Quota and authentication failures stay failed until the account changes.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExceeded | Self::ServerError | Self::EngineOverloaded
        )
    }
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
