//! # Sample Data Store
//!
//! Read-only repositories over the hard-coded records the views render. Each
//! table is built on first access and lives for the rest of the program.
//!
//! ## Example
//!
//! ```rust
//! use lib_core::store::CreatorStore;
//!
//! let alex = CreatorStore::find("creator-001").unwrap();
//! assert_eq!(alex.name, "Alex Morgan");
//! assert!(CreatorStore::find("creator-999").is_err());
//! ```

// region: --- Modules
pub mod collaborations;
pub mod creators;
pub mod nfts;
pub mod stats;
// endregion: --- Modules

// region: --- Re-exports
pub use collaborations::CollaborationStore;
pub use creators::CreatorStore;
pub use nfts::NftStore;
pub use stats::StatsStore;
// endregion: --- Re-exports

use chrono::NaiveDate;

/// Stock photo URL for a Pexels photo id.
pub(crate) fn pexels(id: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
    )
}

/// Calendar date for sample records. Every call site passes a valid date.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pexels_url() {
        assert_eq!(
            pexels(415829),
            "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
        );
    }
}
