//! Creator records: directory cards, leaderboard rows, home page highlights,
//! creators seeking collaborators and the connected creator's profile.

use std::sync::OnceLock;

use shared::{
    Category, Creator, LeaderboardEntry, Platform, PlatformLink, Profile, SeekingCreator, TopCreator, Trend,
};

use super::{pexels, ymd};
use crate::error::{AppError, Result};

use Platform::{Instagram, Twitter, YouTube};

/// Read-only access to creator records.
pub struct CreatorStore;

impl CreatorStore {
    /// Creators listed in the directory, best score first.
    pub fn directory() -> &'static [Creator] {
        static DIRECTORY: OnceLock<Vec<Creator>> = OnceLock::new();
        DIRECTORY.get_or_init(directory_rows)
    }

    /// Look up a directory creator by id.
    pub fn find(id: &str) -> Result<&'static Creator> {
        Self::directory()
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Creator {id}")))
    }

    /// Leaderboard in rank order.
    pub fn leaderboard() -> &'static [LeaderboardEntry] {
        static LEADERBOARD: OnceLock<Vec<LeaderboardEntry>> = OnceLock::new();
        LEADERBOARD.get_or_init(leaderboard_rows)
    }

    /// Leaderboard position of a creator, if ranked.
    pub fn rank_of(id: &str) -> Option<&'static LeaderboardEntry> {
        Self::leaderboard().iter().find(|row| row.id == id)
    }

    /// Top three creators shown on the home page.
    pub fn top_creators() -> &'static [TopCreator] {
        static TOP: OnceLock<Vec<TopCreator>> = OnceLock::new();
        TOP.get_or_init(|| {
            Self::leaderboard()
                .iter()
                .take(3)
                .map(|row| TopCreator {
                    id: row.id.clone(),
                    name: row.name.clone(),
                    avatar: row.avatar.clone(),
                    score: row.score,
                    change: row.change.clone(),
                    category: row.category,
                    collaborations: row.collaborations,
                })
                .collect()
        })
    }

    /// Creators advertising for collaborators on the collaborate page.
    pub fn seeking_collaborators() -> &'static [SeekingCreator] {
        static SEEKING: OnceLock<Vec<SeekingCreator>> = OnceLock::new();
        SEEKING.get_or_init(|| {
            [
                ("creator-005", "Elena Lopez", Category::FoodCooking, "Food content creators for a cookbook NFT project", 774909, 9.0, 22),
                ("creator-006", "James Wilson", Category::Photography, "Collaboration with creators to develop a photo editing preset collection", 220453, 8.9, 15),
                ("creator-007", "Priya Patel", Category::Technology, "Tech reviewers for a new hardware testing series", 1239291, 8.7, 27),
            ]
            .into_iter()
            .map(|(id, name, category, looking, photo, score, collaborations)| SeekingCreator {
                id: id.to_string(),
                name: name.to_string(),
                category,
                looking: looking.to_string(),
                image: pexels(photo),
                score,
                collaborations,
            })
            .collect()
        })
    }

    /// Profile of the connected creator.
    pub fn profile() -> &'static Profile {
        static PROFILE: OnceLock<Profile> = OnceLock::new();
        PROFILE.get_or_init(|| Profile {
            name: "Alex Morgan".into(),
            handle: "@alexmorganart".into(),
            avatar: pexels(415829),
            banner: pexels(1762851),
            bio: "Digital artist exploring the intersection of art and technology. Creating unique NFTs and collaborating on Web3 projects.".into(),
            category: Category::DigitalArt,
            score: 9.8,
            platforms: vec![
                PlatformLink {
                    platform: Twitter,
                    url: "https://twitter.com/alexmorganart".into(),
                },
                PlatformLink {
                    platform: Instagram,
                    url: "https://instagram.com/alexmorganart".into(),
                },
            ],
            nfts: 12,
            collaborations: 28,
            joined: ymd(2025, 1, 15),
        })
    }
}

fn directory_rows() -> Vec<Creator> {
    [
        ("creator-001", "Alex Morgan", "@alexmorganart", 415829, 1762851, vec![Twitter, Instagram], Category::DigitalArt, 9.8,
            "Creating digital art and exploring NFT collections. Based in Paris.", 12, 28),
        ("creator-002", "Mike Chen", "@mikechentech", 2379005, 546819, vec![Twitter, YouTube], Category::Technology, 9.6,
            "Tech reviewer and blockchain enthusiast. Creating content about the latest in Web3.", 8, 42),
        ("creator-003", "Sarah Johnson", "@sarahfitness", 733872, 863988, vec![Instagram, YouTube], Category::HealthFitness, 9.4,
            "Fitness coach and wellness advocate. Sharing workout tips and healthy recipes.", 15, 35),
        ("creator-004", "David Kim", "@davidkimmusic", 1681010, 1105666, vec![Twitter, Instagram, YouTube], Category::Music, 9.2,
            "Independent musician and producer exploring Web3 music distribution.", 24, 19),
        ("creator-005", "Elena Lopez", "@elenacooks", 774909, 1640774, vec![Instagram, YouTube], Category::FoodCooking, 9.0,
            "Chef and food content creator sharing authentic recipes from around the world.", 9, 22),
        ("creator-006", "James Wilson", "@jameswilsonphoto", 220453, 1323550, vec![Instagram, Twitter], Category::Photography, 8.9,
            "Travel photographer capturing landscapes and urban scenes from across the globe.", 31, 15),
    ]
    .into_iter()
    .map(|(id, name, handle, avatar, banner, platforms, category, score, bio, nfts, collaborations)| Creator {
        id: id.to_string(),
        name: name.to_string(),
        handle: handle.to_string(),
        avatar: pexels(avatar),
        banner: pexels(banner),
        platforms,
        category,
        score,
        bio: bio.to_string(),
        nfts,
        collaborations,
    })
    .collect()
}

fn leaderboard_rows() -> Vec<LeaderboardEntry> {
    [
        ("creator-001", "Alex Morgan", "@alexmorganart", 415829, vec![Twitter, Instagram], Category::DigitalArt, 9.8, "+0.3", Trend::Up, 28),
        ("creator-002", "Mike Chen", "@mikechentech", 2379005, vec![Twitter, YouTube], Category::Technology, 9.6, "+0.5", Trend::Up, 42),
        ("creator-003", "Sarah Johnson", "@sarahfitness", 733872, vec![Instagram, YouTube], Category::HealthFitness, 9.4, "+0.2", Trend::Up, 35),
        ("creator-004", "David Kim", "@davidkimmusic", 1681010, vec![Twitter, Instagram, YouTube], Category::Music, 9.2, "-0.1", Trend::Down, 19),
        ("creator-005", "Elena Lopez", "@elenacooks", 774909, vec![Instagram, YouTube], Category::FoodCooking, 9.0, "0.0", Trend::Flat, 22),
        ("creator-006", "James Wilson", "@jameswilsonphoto", 220453, vec![Instagram, Twitter], Category::Photography, 8.9, "+0.2", Trend::Up, 15),
        ("creator-007", "Priya Patel", "@priyatech", 1239291, vec![Twitter, YouTube], Category::Technology, 8.7, "-0.2", Trend::Down, 27),
        ("creator-008", "Robert Garcia", "@robertgarcia", 614810, vec![Twitter, Instagram], Category::Gaming, 8.6, "+0.3", Trend::Up, 31),
        ("creator-009", "Emma Wright", "@emmatravel", 712513, vec![Instagram, YouTube], Category::Travel, 8.5, "+0.1", Trend::Up, 24),
        ("creator-010", "Jason Lee", "@jasonleedev", 1222271, vec![Twitter], Category::Programming, 8.4, "-0.1", Trend::Down, 18),
    ]
    .into_iter()
    .zip(1..)
    .map(|((id, name, handle, avatar, platforms, category, score, change, trend, collaborations), rank)| LeaderboardEntry {
        id: id.to_string(),
        rank,
        name: name.to_string(),
        handle: handle.to_string(),
        avatar: pexels(avatar),
        platforms,
        category,
        score,
        change: change.to_string(),
        trend,
        collaborations,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_sorted_by_score() {
        let creators = CreatorStore::directory();
        assert_eq!(creators.len(), 6);
        assert!(creators.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_find_unknown_creator() {
        assert_eq!(CreatorStore::find("creator-002").unwrap().handle, "@mikechentech");
        assert!(matches!(CreatorStore::find("nope"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_leaderboard_ranks_are_sequential() {
        let rows = CreatorStore::leaderboard();
        assert_eq!(rows.len(), 10);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.rank as usize, i + 1);
        }
        assert_eq!(CreatorStore::rank_of("creator-010").unwrap().name, "Jason Lee");
    }

    #[test]
    fn test_top_creators_follow_leaderboard() {
        let names: Vec<_> = CreatorStore::top_creators().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alex Morgan", "Mike Chen", "Sarah Johnson"]);
    }

    #[test]
    fn test_profile() {
        let profile = CreatorStore::profile();
        assert_eq!(profile.joined, ymd(2025, 1, 15));
        assert_eq!(profile.platforms.len(), 2);
    }
}
