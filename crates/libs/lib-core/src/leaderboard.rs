//! # Leaderboard
//!
//! Ranks are fixed in the sample rows; filtering only hides rows and never
//! renumbers them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::{Category, LeaderboardEntry, UnknownVariant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    #[default]
    AllTime,
    Monthly,
    Weekly,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::AllTime, Timeframe::Monthly, Timeframe::Weekly];

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::AllTime => "All Time",
            Timeframe::Monthly => "Monthly",
            Timeframe::Weekly => "Weekly",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Timeframe::AllTime => "all-time",
            Timeframe::Monthly => "monthly",
            Timeframe::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.slug() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Podium position for the first three ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: u32) -> Option<Medal> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Medal::Gold => "medal-gold",
            Medal::Silver => "medal-silver",
            Medal::Bronze => "medal-bronze",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub timeframe: Timeframe,
    pub category: Option<Category>,
}

/// Rows matching `query`, in rank order.
///
/// Every timeframe shows the same rows.
pub fn filter_leaderboard<'a>(
    rows: &'a [LeaderboardEntry],
    query: &LeaderboardQuery,
) -> Vec<&'a LeaderboardEntry> {
    rows.iter()
        .filter(|row| query.category.map_or(true, |c| row.category == c))
        .collect()
}

/// Categories offered by the leaderboard dropdown, after "All Categories".
pub const LEADERBOARD_CATEGORIES: [Category; 9] = [
    Category::DigitalArt,
    Category::Technology,
    Category::HealthFitness,
    Category::Music,
    Category::FoodCooking,
    Category::Photography,
    Category::Gaming,
    Category::Travel,
    Category::Programming,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CreatorStore;

    #[test]
    fn test_timeframe_slug_roundtrip() {
        assert_eq!("all-time".parse::<Timeframe>(), Ok(Timeframe::AllTime));
        assert!("yearly".parse::<Timeframe>().is_err());
        assert_eq!(Timeframe::default(), Timeframe::AllTime);
    }

    #[test]
    fn test_medals() {
        assert_eq!(Medal::for_rank(1), Some(Medal::Gold));
        assert_eq!(Medal::for_rank(3), Some(Medal::Bronze));
        assert_eq!(Medal::for_rank(4), None);
        assert_eq!(Medal::for_rank(0), None);
    }

    #[test]
    fn test_filter_keeps_rank_order() {
        let query = LeaderboardQuery {
            category: Some(Category::Technology),
            ..Default::default()
        };
        let rows = filter_leaderboard(CreatorStore::leaderboard(), &query);
        let ranks: Vec<_> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [2, 7]);
    }

    #[test]
    fn test_timeframe_does_not_change_rows() {
        let rows = CreatorStore::leaderboard();
        let all_time = filter_leaderboard(rows, &LeaderboardQuery::default());
        let weekly = filter_leaderboard(
            rows,
            &LeaderboardQuery {
                timeframe: Timeframe::Weekly,
                category: None,
            },
        );
        assert_eq!(all_time, weekly);
        assert_eq!(all_time.len(), 10);
    }

    #[test]
    fn test_every_ranked_category_is_offered() {
        for row in CreatorStore::leaderboard() {
            assert!(LEADERBOARD_CATEGORIES.contains(&row.category), "{}", row.category);
        }
    }
}
