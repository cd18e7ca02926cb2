//! # Display Records
//!
//! Data structures shown by the front-end views.
//!
//! ## Module Organization
//!
//! - [`creator`] - Creators, leaderboard rows, platforms and categories
//! - [`nft`] - Creator NFTs and collaboration NFTs
//! - [`collaboration`] - Open projects and collaboration history
//! - [`stats`] - Platform totals and analytics series
//!
//! ## Serialization Format
//!
//! All records use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to slugs (`#[serde(rename_all = "lowercase")]` / `"kebab-case"`)
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "id": "creator-001",
//!   "name": "Alex Morgan",
//!   "handle": "@alexmorganart",
//!   "platforms": ["twitter", "instagram"],
//!   "category": "digital-art",
//!   "score": 9.8,
//!   "nfts": 12,
//!   "collaborations": 28
//! }
//! ```

pub mod collaboration;
pub mod creator;
pub mod nft;
pub mod stats;

pub use collaboration::*;
pub use creator::*;
pub use nft::*;
pub use stats::*;
