//! Pluggable seams of the connect call.
//!
//! Both traits are `?Send`: the browser runs every future on one thread and
//! `gloo-timers` futures are not `Send`.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::SessionConfig;
use crate::error::Result;

/// Non-blocking timed wait.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Source of the account address for a connection attempt.
#[async_trait(?Send)]
pub trait WalletBackend {
    async fn request_account(&self) -> Result<String>;
}

/// Simulated wallet: waits `delay`, then always hands out `address`.
pub struct MockWalletBackend {
    timer: Rc<dyn Timer>,
    delay: Duration,
    address: String,
}

impl MockWalletBackend {
    pub fn new(timer: Rc<dyn Timer>, delay: Duration, address: impl Into<String>) -> Self {
        Self {
            timer,
            delay,
            address: address.into(),
        }
    }

    pub fn from_config(timer: Rc<dyn Timer>, config: &SessionConfig) -> Self {
        Self::new(timer, config.connect_delay, config.mock_address.clone())
    }
}

#[async_trait(?Send)]
impl WalletBackend for MockWalletBackend {
    async fn request_account(&self) -> Result<String> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "simulating wallet approval");
        self.timer.sleep(self.delay).await;
        Ok(self.address.clone())
    }
}
