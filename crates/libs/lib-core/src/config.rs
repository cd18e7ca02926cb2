//! # Session Configuration
//!
//! Timing and identity settings for the simulated wallet and the mock mint call.
//! Every field has a default; a lookup function (the page query string in the
//! browser) may override individual values. Configuration is validated once at
//! startup to fail fast if misconfigured.
//!
//! ```rust
//! use lib_core::config::SessionConfig;
//!
//! let config = SessionConfig::from_lookup(|key| match key {
//!     "connect_delay_ms" => Some("250".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.connect_delay.as_millis(), 250);
//! ```

use std::time::Duration;

use crate::error::{AppError, Result};

/// Address returned by the simulated wallet.
pub const MOCK_ADDRESS: &str = "0x7f39Eb4C3A27c492c22AB7e1CeCF7134068f48B3";

/// Query keys understood by [`SessionConfig::from_lookup`].
pub const KEY_CONNECT_DELAY: &str = "connect_delay_ms";
pub const KEY_CONNECT_TIMEOUT: &str = "connect_timeout_ms";
pub const KEY_MINT_DELAY: &str = "mint_delay_ms";
pub const KEY_TOAST_DURATION: &str = "toast_duration_ms";
pub const KEY_MOCK_ADDRESS: &str = "mock_address";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Simulated latency of the wallet connection
    pub connect_delay: Duration,

    /// Upper bound on a connection attempt before it fails
    ///
    /// Must be larger than `connect_delay`, otherwise every attempt would time out.
    pub connect_timeout: Duration,

    /// Address assigned when the simulated connection succeeds
    pub mock_address: String,

    /// Simulated latency of the mint call
    pub mint_delay: Duration,

    /// How long a toast stays on screen
    pub toast_duration: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_delay: Duration::from_millis(1500),
            connect_timeout: Duration::from_millis(10_000),
            mock_address: MOCK_ADDRESS.to_string(),
            mint_delay: Duration::from_millis(2000),
            toast_duration: Duration::from_millis(4000),
        }
    }
}

impl SessionConfig {
    /// Build a configuration from defaults plus overrides supplied by `lookup`,
    /// then validate it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            connect_delay: millis_or(&lookup, KEY_CONNECT_DELAY, defaults.connect_delay)?,
            connect_timeout: millis_or(&lookup, KEY_CONNECT_TIMEOUT, defaults.connect_timeout)?,
            mock_address: lookup(KEY_MOCK_ADDRESS).unwrap_or(defaults.mock_address),
            mint_delay: millis_or(&lookup, KEY_MINT_DELAY, defaults.mint_delay)?,
            toast_duration: millis_or(&lookup, KEY_TOAST_DURATION, defaults.toast_duration)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout.is_zero() {
            return Err(AppError::Config(format!("{KEY_CONNECT_TIMEOUT} must be greater than 0")));
        }

        if self.connect_timeout <= self.connect_delay {
            return Err(AppError::Config(format!(
                "{KEY_CONNECT_TIMEOUT} ({:?}) must exceed {KEY_CONNECT_DELAY} ({:?})",
                self.connect_timeout, self.connect_delay
            )));
        }

        if self.mock_address.trim().is_empty() {
            return Err(AppError::Config(format!("{KEY_MOCK_ADDRESS} cannot be empty")));
        }

        Ok(())
    }
}

fn millis_or<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| AppError::Config(format!("{key} must be a whole number of milliseconds: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.connect_delay, Duration::from_millis(1500));
        assert_eq!(config.mock_address, MOCK_ADDRESS);
    }

    #[test]
    fn test_no_overrides_yields_defaults() {
        let config = SessionConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config = SessionConfig::from_lookup(|key| match key {
            KEY_CONNECT_DELAY => Some("10".into()),
            KEY_CONNECT_TIMEOUT => Some(" 50 ".into()),
            KEY_MOCK_ADDRESS => Some("0xabc".into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.connect_delay, Duration::from_millis(10));
        assert_eq!(config.connect_timeout, Duration::from_millis(50));
        assert_eq!(config.mock_address, "0xabc");
        assert_eq!(config.mint_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_malformed_number_rejected() {
        let err = SessionConfig::from_lookup(|key| (key == KEY_MINT_DELAY).then(|| "soon".into()))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.starts_with(KEY_MINT_DELAY)));
    }

    #[test]
    fn test_timeout_must_exceed_delay() {
        let err = SessionConfig::from_lookup(|key| match key {
            KEY_CONNECT_DELAY => Some("2000".into()),
            KEY_CONNECT_TIMEOUT => Some("2000".into()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_empty_address_rejected() {
        let config = SessionConfig {
            mock_address: "  ".into(),
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
