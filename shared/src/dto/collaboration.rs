use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a collaboration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaborationStatus {
    Active,
    Completed,
}

impl CollaborationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CollaborationStatus::Active => "Active",
            CollaborationStatus::Completed => "Completed",
        }
    }

    /// Prefix for the end date line: "Ends" while running, "Ended" afterwards.
    pub fn end_prefix(&self) -> &'static str {
        match self {
            CollaborationStatus::Active => "Ends",
            CollaborationStatus::Completed => "Ended",
        }
    }
}

/// Organisation or creator on the other side of a collaboration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    pub image: String,
}

/// Open project looking for collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub owner: Partner,
    pub duration: String,
    pub compensation: String,
    pub applicants: u32,
}

/// Entry of the connected creator's collaboration history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
    pub id: String,
    pub title: String,
    pub category: String,
    pub partner: Partner,
    pub status: CollaborationStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub nft_image: String,
}
