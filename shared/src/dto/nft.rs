use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::collaboration::CollaborationStatus;
use super::creator::Platform;

/// Recently minted NFT shown on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentNft {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    /// Free-form label, not restricted to [`super::creator::Category`]
    pub category: String,
    pub creator: String,
    pub image: String,
    pub score: f64,
}

/// Social-account NFT owned by the connected creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorNft {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub category: String,
    pub image: String,
    pub score: f64,
    pub mint_date: NaiveDate,
    pub account: String,
    pub followers: String,
    pub avg_engagement: String,
}

/// NFT minted as proof of a collaboration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationNft {
    pub id: String,
    pub name: String,
    pub partner: String,
    pub category: String,
    pub image: String,
    pub status: CollaborationStatus,
    pub mint_date: NaiveDate,
    pub end_date: NaiveDate,
}
