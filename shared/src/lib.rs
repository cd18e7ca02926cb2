//! # Shared Display Records
//!
//! This library defines the records rendered by the CreatorHub front-end and
//! produced by the in-memory stores in `lib-core`. Every record is plain data:
//! there is no backend, so the values are fixed sample data.
//!
//! ## Structure
//!
//! - **[`dto`]**: Display records
//!   - **[`dto::creator`]**: Creators, leaderboard rows, platforms and categories
//!   - **[`dto::nft`]**: Creator and collaboration NFTs
//!   - **[`dto::collaboration`]**: Open projects and collaboration history
//!   - **[`dto::stats`]**: Platform totals and creator analytics series
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! All records serialize to JSON using `serde`:
//! - Field names use **snake_case**
//! - Enums serialize to lowercase or kebab-case slugs (`"digital-art"`, `"youtube"`)
//! - Dates serialize as ISO-8601 (`"2025-03-10"`)
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::creator::{Category, Platform};
//! use shared::utils::truncate_address;
//!
//! assert_eq!(Category::HealthFitness.label(), "Health & Fitness");
//! assert_eq!(Platform::YouTube.slug(), "youtube");
//! assert_eq!(
//!     truncate_address("0x7f39Eb4C3A27c492c22AB7e1CeCF7134068f48B3"),
//!     "0x7f39...48B3"
//! );
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
