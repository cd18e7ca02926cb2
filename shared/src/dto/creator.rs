use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Social platform a creator account lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Twitter, Platform::Instagram, Platform::YouTube];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::YouTube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = UnknownVariant;

    /// Accepts either the slug or the display label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(s) || p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Primary content focus of a creator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DigitalArt,
    Technology,
    HealthFitness,
    Music,
    FoodCooking,
    Photography,
    Gaming,
    Travel,
    Programming,
    Fashion,
    Education,
    Finance,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::DigitalArt,
        Category::Technology,
        Category::HealthFitness,
        Category::Music,
        Category::FoodCooking,
        Category::Photography,
        Category::Gaming,
        Category::Travel,
        Category::Programming,
        Category::Fashion,
        Category::Education,
        Category::Finance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::DigitalArt => "Digital Art",
            Category::Technology => "Technology",
            Category::HealthFitness => "Health & Fitness",
            Category::Music => "Music",
            Category::FoodCooking => "Food & Cooking",
            Category::Photography => "Photography",
            Category::Gaming => "Gaming",
            Category::Travel => "Travel",
            Category::Programming => "Programming",
            Category::Fashion => "Fashion",
            Category::Education => "Education",
            Category::Finance => "Finance",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Category::DigitalArt => "digital-art",
            Category::Technology => "technology",
            Category::HealthFitness => "health-fitness",
            Category::Music => "music",
            Category::FoodCooking => "food-cooking",
            Category::Photography => "photography",
            Category::Gaming => "gaming",
            Category::Travel => "travel",
            Category::Programming => "programming",
            Category::Fashion => "fashion",
            Category::Education => "education",
            Category::Finance => "finance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    /// Accepts either the slug (`"health-fitness"`) or the label (`"Health & Fitness"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s || c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Returned when a slug or label does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// Creator card in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub banner: String,
    pub platforms: Vec<Platform>,
    pub category: Category,
    pub score: f64,
    pub bio: String,
    pub nfts: u32,
    pub collaborations: u32,
}

/// Direction of a score change since the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[serde(rename = "none")]
    Flat,
}

/// Row of the creator leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub rank: u32,
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub platforms: Vec<Platform>,
    pub category: Category,
    pub score: f64,
    /// Signed change, e.g. `"+0.3"`
    pub change: String,
    pub trend: Trend,
    pub collaborations: u32,
}

/// Compact row for the home page "Top Creators" list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCreator {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub score: f64,
    pub change: String,
    pub category: Category,
    pub collaborations: u32,
}

/// Creator advertising that they are looking for collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekingCreator {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub looking: String,
    pub image: String,
    pub score: f64,
    pub collaborations: u32,
}

/// Link from a profile to one of its social accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformLink {
    pub platform: Platform,
    pub url: String,
}

/// Profile of the connected creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub banner: String,
    pub bio: String,
    pub category: Category,
    pub score: f64,
    pub platforms: Vec<PlatformLink>,
    pub nfts: u32,
    pub collaborations: u32,
    pub joined: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_and_label_parse() {
        assert_eq!("health-fitness".parse::<Category>(), Ok(Category::HealthFitness));
        assert_eq!("Food & Cooking".parse::<Category>(), Ok(Category::FoodCooking));
        assert!("design".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_uses_slug() {
        let json = serde_json::to_string(&Category::DigitalArt).unwrap();
        assert_eq!(json, "\"digital-art\"");
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.slug()));
        }
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("YouTube".parse::<Platform>(), Ok(Platform::YouTube));
        assert_eq!("twitter".parse::<Platform>(), Ok(Platform::Twitter));
        assert!("tiktok".parse::<Platform>().is_err());
    }

    #[test]
    fn test_trend_flat_serializes_as_none() {
        assert_eq!(serde_json::to_string(&Trend::Flat).unwrap(), "\"none\"");
    }
}
