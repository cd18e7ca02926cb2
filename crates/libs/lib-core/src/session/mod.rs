//! # Wallet Session
//!
//! Connection lifecycle of the mock wallet:
//!
//! ```text
//!                begin_connect            complete_connect
//! Disconnected ───────────────► Connecting ───────────────► Connected
//!      ▲                          │  fail_connect /                │
//!      │                          │  cancel_connect                │
//!      ├──────────────────────────┘                                │
//!      └────────────────────────── disconnect ─────────────────────┘
//! ```
//!
//! The address lives inside the `Connected` variant, so it is present exactly
//! when the session is connected. Operations invoked from a state that does not
//! permit them return [`AppError::InvalidTransition`] and change nothing.
//!
//! The synchronous machine lives here; [`controller`] drives the timed connect
//! call on top of it and [`backend`] provides the pluggable timer and wallet.

pub mod backend;
pub mod controller;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub use backend::{MockWalletBackend, Timer, WalletBackend};
pub use controller::{ConnectOutcome, PendingConnect, SessionStore, WalletController};

/// Current phase of the wallet connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletStatus {
    Disconnected,
    Connecting,
    Connected,
}

impl fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WalletStatus::Disconnected => "disconnected",
            WalletStatus::Connecting => "connecting",
            WalletStatus::Connected => "connected",
        })
    }
}

/// Identifies one connection attempt.
///
/// Only the ticket of the attempt in flight can complete or fail it, so a
/// late result from a cancelled attempt is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Disconnected,
    Connecting { attempt: u64 },
    Connected { address: String },
}

/// Connection state and mock account of the current visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSession {
    state: State,
    next_attempt: u64,
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletSession {
    pub fn new() -> Self {
        Self {
            state: State::Disconnected,
            next_attempt: 0,
        }
    }

    pub fn status(&self) -> WalletStatus {
        match self.state {
            State::Disconnected => WalletStatus::Disconnected,
            State::Connecting { .. } => WalletStatus::Connecting,
            State::Connected { .. } => WalletStatus::Connected,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match &self.state {
            State::Connected { address } => Some(address),
            _ => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, State::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self.state, State::Connecting { .. })
    }

    /// `Disconnected → Connecting`.
    pub fn begin_connect(&mut self) -> Result<ConnectTicket> {
        match self.state {
            State::Disconnected => {
                let attempt = self.next_attempt;
                self.next_attempt += 1;
                self.state = State::Connecting { attempt };
                tracing::debug!(attempt, "wallet connect started");
                Ok(ConnectTicket(attempt))
            }
            _ => Err(self.reject("connect")),
        }
    }

    /// `Connecting → Connected` for the attempt identified by `ticket`.
    pub fn complete_connect(&mut self, ticket: ConnectTicket, address: String) -> Result<()> {
        self.ensure_current(ticket, "complete connect")?;
        tracing::info!(attempt = ticket.0, %address, "wallet connected");
        self.state = State::Connected { address };
        Ok(())
    }

    /// `Connecting → Disconnected` after the attempt identified by `ticket` failed.
    pub fn fail_connect(&mut self, ticket: ConnectTicket) -> Result<()> {
        self.ensure_current(ticket, "fail connect")?;
        tracing::warn!(attempt = ticket.0, "wallet connect failed");
        self.state = State::Disconnected;
        Ok(())
    }

    /// Abandon any attempt in flight. Returns whether one was cancelled.
    pub fn cancel_connect(&mut self) -> bool {
        if let State::Connecting { attempt } = self.state {
            tracing::debug!(attempt, "wallet connect cancelled");
            self.state = State::Disconnected;
            true
        } else {
            false
        }
    }

    /// `Connected → Disconnected`, clearing the address.
    pub fn disconnect(&mut self) -> Result<()> {
        match self.state {
            State::Connected { .. } => {
                self.state = State::Disconnected;
                tracing::info!("wallet disconnected");
                Ok(())
            }
            _ => Err(self.reject("disconnect")),
        }
    }

    fn ensure_current(&self, ticket: ConnectTicket, action: &'static str) -> Result<()> {
        match self.state {
            State::Connecting { attempt } if attempt == ticket.0 => Ok(()),
            _ => Err(self.reject(action)),
        }
    }

    fn reject(&self, action: &'static str) -> AppError {
        let from = self.status();
        tracing::debug!(%from, action, "ignored wallet transition");
        AppError::InvalidTransition { from, action }
    }
}
