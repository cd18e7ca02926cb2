//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used by the
//! wallet session, configuration loading and the form layer. It follows the
//! `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Session Errors** - wallet lifecycle issues
//!    - [`InvalidTransition`](AppError::InvalidTransition) → the guarded no-op
//!      (e.g. `connect` while already `Connecting`)
//!    - [`Detached`](AppError::Detached) → the owner of the session is gone
//!    - [`Timeout`](AppError::Timeout) / [`Backend`](AppError::Backend) → the
//!      simulated wallet call did not produce an account
//!
//! 2. **Input Errors**
//!    - [`Validation`](AppError::Validation) → a form failed validation
//!    - [`NotFound`](AppError::NotFound) → unknown creator id
//!
//! 3. **Startup Errors**
//!    - [`Config`](AppError::Config) → invalid [`crate::config::SessionConfig`]
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_address(addr: Option<&str>) -> Result<&str> {
//!     addr.ok_or_else(|| AppError::Validation("No wallet connected".to_string()))
//! }
//!
//! assert!(require_address(None).is_err());
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::session::WalletStatus;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// An operation was invoked from a state that does not permit it.
    /// The session is left unchanged.
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: WalletStatus,
        action: &'static str,
    },

    /// The session store was dropped (view unmounted) before the operation ran.
    #[error("Wallet session is no longer available")]
    Detached,

    /// The simulated wallet call exceeded the configured timeout.
    #[error("Wallet did not respond within {0:?}")]
    Timeout(Duration),

    /// The wallet backend reported a failure.
    #[error("Wallet error: {0}")]
    Backend(String),

    /// Form input failed validation.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Configuration error during startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Get a user-facing message.
    ///
    /// Wallet failures collapse into one generic message; the details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Timeout(_) | AppError::Backend(_) | AppError::Detached => {
                "Connection failed".to_string()
            }
            AppError::InvalidTransition { .. } => self.to_string(),
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Config(_) => "An internal error occurred".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let err = AppError::InvalidTransition {
            from: WalletStatus::Connecting,
            action: "connect",
        };
        assert_eq!(err.to_string(), "Cannot connect while connecting");
    }

    #[test]
    fn test_wallet_failures_share_user_message() {
        assert_eq!(AppError::Timeout(Duration::from_secs(10)).user_message(), "Connection failed");
        assert_eq!(AppError::Backend("rejected".into()).user_message(), "Connection failed");
        assert_eq!(
            AppError::Config("connect_timeout_ms".into()).user_message(),
            "An internal error occurred"
        );
    }
}
