//! Contract error types for workspace settings
//!
//! These errors are transport-agnostic. The REST layer maps them onto HTTP
//! problem details, in-process callers match on them directly.

use thiserror::Error;

/// Workspace settings errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Malformed resource name, unknown key, or a mutation refused by policy
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Human-readable reason
        message: String,
    },
    /// Caller is not allowed to mutate workspace settings
    #[error("permission denied")]
    PermissionDenied,
    /// No value stored for the requested key
    #[error("workspace setting not found: {name}")]
    NotFound {
        /// Resource name that was requested
        name: String,
    },
    /// Store or caller-resolution failure
    #[error("internal error: {message}")]
    Internal {
        /// Short description of the failed step
        message: String,
    },
}

impl SettingsError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
