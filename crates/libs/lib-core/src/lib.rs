//! # Core Library
//!
//! Wallet session, configuration, sample data and the list/form logic behind
//! the CreatorHub views. Nothing here touches the DOM, so it builds and tests
//! natively as well as for `wasm32`.

pub mod collaboration;
pub mod config;
pub mod directory;
pub mod error;
pub mod forms;
pub mod leaderboard;
pub mod notify;
pub mod session;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use config::SessionConfig;
pub use error::{AppError, Result};
pub use notify::{Notice, NoticeKind, NoticeQueue, Toast};
pub use session::{
    ConnectOutcome, MockWalletBackend, SessionStore, Timer, WalletBackend, WalletController, WalletSession,
    WalletStatus,
};
