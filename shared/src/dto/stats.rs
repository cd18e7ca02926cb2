use serde::{Deserialize, Serialize};

/// Platform-wide totals shown on the home page
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_creators: u64,
    pub total_nfts: u64,
    pub total_collaborations: u64,
    pub credit_score_avg: f64,
}

/// One bucket of the creator analytics series (a weekday or a month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsPoint {
    pub label: String,
    pub score: f64,
    pub collaborations: u32,
    pub mentions: u32,
}

/// Component of the social credit score breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub name: String,
    pub score: f64,
}
