//! Error handling for the HTTP-call wrapper
//!
//! This module provides the normalized error type that collapses every
//! failure shape an HTTP call can produce (transport failure, HTTP error
//! status, application-level error payload) into one representation.

use std::fmt;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Normalized error for the HTTP-call wrapper
///
/// Every failure an API call can produce becomes one of these variants:
/// - `Transport`: the request never completed (DNS failure, connection
///   refused, body read failure). Reported with the sentinel code 900.
/// - `Status`: the server answered with an HTTP error status. The status
///   may be unavailable on some underlying errors, in which case the
///   sentinel code 520 is reported instead.
/// - `Payload`: the transport and status were fine, but the response body
///   itself carried an error indicator with its own code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The underlying network call could not complete
    Transport {
        message: String,
    },
    /// The server answered with an HTTP error status (4xx/5xx)
    Status {
        code: Option<u16>,
        message: String,
    },
    /// An otherwise-successful response carried an error payload
    Payload {
        code: Option<u16>,
        message: String,
    },
}

impl ApiError {
    /// Sentinel code for transport-level failures
    pub const TRANSPORT_CODE: u16 = 900;

    /// Sentinel code for failures with no determinable HTTP status
    pub const UNKNOWN_STATUS_CODE: u16 = 520;

    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new HTTP-status error
    pub fn status(code: Option<u16>, message: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: message.into(),
        }
    }

    /// Create a new payload error
    pub fn payload(code: Option<u16>, message: impl Into<String>) -> Self {
        Self::Payload {
            code,
            message: message.into(),
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::Transport { .. } => "Transport Error",
            Self::Status { .. } => "Status Error",
            Self::Payload { .. } => "Payload Error",
        }
    }

    /// Get the numeric error code
    ///
    /// Transport failures always report 900. Status and payload failures
    /// report their own code when one was determinable, falling back to
    /// 520 otherwise.
    pub fn error_code(&self) -> u16 {
        match self {
            Self::Transport { .. } => Self::TRANSPORT_CODE,
            Self::Status { code, .. } | Self::Payload { code, .. } => {
                code.unwrap_or(Self::UNKNOWN_STATUS_CODE)
            }
        }
    }

    /// Get the underlying error message
    pub fn error_msg(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Status { message, .. }
            | Self::Payload { message, .. } => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind(), self.error_code(), self.error_msg())
    }
}

impl std::error::Error for ApiError {}
