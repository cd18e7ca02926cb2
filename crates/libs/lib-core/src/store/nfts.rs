//! Minted NFT records.

use std::sync::OnceLock;

use shared::{CollaborationNft, CollaborationStatus, CreatorNft, Platform, RecentNft};

use super::{pexels, ymd};

pub struct NftStore;

impl NftStore {
    /// Latest mints shown on the home page.
    pub fn recent() -> &'static [RecentNft] {
        static RECENT: OnceLock<Vec<RecentNft>> = OnceLock::new();
        RECENT.get_or_init(|| {
            [
                ("nft-001", "Digital Artisan", Platform::Twitter, "Digital Art", "Alex Morgan", 2166711, 9.2),
                ("nft-002", "Fitness Guru", Platform::Instagram, "Health & Fitness", "Sarah Fitness", 1547248, 8.7),
                ("nft-003", "Tech Reviewer", Platform::YouTube, "Technology", "Tech With Mike", 2582937, 8.9),
            ]
            .into_iter()
            .map(|(id, name, platform, category, creator, photo, score)| RecentNft {
                id: id.into(),
                name: name.into(),
                platform,
                category: category.into(),
                creator: creator.into(),
                image: pexels(photo),
                score,
            })
            .collect()
        })
    }

    /// Social account NFTs owned by the connected creator.
    pub fn creator_nfts() -> &'static [CreatorNft] {
        static OWNED: OnceLock<Vec<CreatorNft>> = OnceLock::new();
        OWNED.get_or_init(|| {
            vec![
                CreatorNft {
                    id: "nft-001".into(),
                    name: "Digital Artisan".into(),
                    platform: Platform::Twitter,
                    category: "Digital Art".into(),
                    image: pexels(2166711),
                    score: 9.7,
                    mint_date: ymd(2025, 3, 15),
                    account: "@alexmorganart".into(),
                    followers: "24.5K".into(),
                    avg_engagement: "8.2%".into(),
                },
                CreatorNft {
                    id: "nft-002".into(),
                    name: "Design Curator".into(),
                    platform: Platform::Instagram,
                    category: "Design".into(),
                    image: pexels(1762851),
                    score: 9.4,
                    mint_date: ymd(2025, 2, 28),
                    account: "@alexmorgan.design".into(),
                    followers: "32.1K".into(),
                    avg_engagement: "5.8%".into(),
                },
                CreatorNft {
                    id: "nft-003".into(),
                    name: "Creative Process".into(),
                    platform: Platform::YouTube,
                    category: "Education".into(),
                    image: pexels(3685523),
                    score: 8.9,
                    mint_date: ymd(2025, 1, 10),
                    account: "Alex Morgan Art".into(),
                    followers: "18.7K".into(),
                    avg_engagement: "12.3%".into(),
                },
            ]
        })
    }

    /// Collaboration NFTs held by the connected creator.
    pub fn collaboration_nfts() -> &'static [CollaborationNft] {
        static COLLABS: OnceLock<Vec<CollaborationNft>> = OnceLock::new();
        COLLABS.get_or_init(|| {
            vec![
                CollaborationNft {
                    id: "collab-001".into(),
                    name: "AI Art Generator".into(),
                    partner: "TechInnovators".into(),
                    category: "Technology".into(),
                    image: pexels(2599244),
                    status: CollaborationStatus::Active,
                    mint_date: ymd(2025, 3, 10),
                    end_date: ymd(2025, 6, 10),
                },
                CollaborationNft {
                    id: "collab-002".into(),
                    name: "Fitness Challenge Series".into(),
                    partner: "FitLife".into(),
                    category: "Health & Fitness".into(),
                    image: pexels(841130),
                    status: CollaborationStatus::Completed,
                    mint_date: ymd(2025, 1, 5),
                    end_date: ymd(2025, 3, 5),
                },
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(NftStore::recent().len(), 3);
        assert_eq!(NftStore::creator_nfts().len(), 3);
        assert_eq!(NftStore::collaboration_nfts().len(), 2);
    }

    #[test]
    fn test_collaboration_nft_dates_ordered() {
        for nft in NftStore::collaboration_nfts() {
            assert!(nft.mint_date < nft.end_date, "{}", nft.name);
        }
    }
}
