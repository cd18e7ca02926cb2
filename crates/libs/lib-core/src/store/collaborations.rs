//! Open projects and the connected creator's collaboration history.

use std::sync::OnceLock;

use shared::{Collaboration, CollaborationStatus, Partner, Project};

use super::{pexels, ymd};
use crate::error::{AppError, Result};

pub struct CollaborationStore;

impl CollaborationStore {
    /// Projects looking for collaborators.
    pub fn projects() -> &'static [Project] {
        static PROJECTS: OnceLock<Vec<Project>> = OnceLock::new();
        PROJECTS.get_or_init(|| {
            [
                ("project-001", "DeFi Dashboard", "Finance",
                    "Building a comprehensive dashboard for DeFi protocols with real-time data visualization.",
                    6801648, "Blockchain Builders", 2379005, "3 months", "5 SUI + Revenue Share", 12),
                ("project-002", "NFT Collection Launch", "Art",
                    "Seeking digital artists to collaborate on a new generative art NFT collection with 10,000 unique pieces.",
                    2694434, "MetaArt Studios", 415829, "2 months", "Revenue Split (70/30)", 34),
                ("project-003", "Web3 Educational Series", "Education",
                    "Creating an educational video series explaining Web3 concepts for beginners with animated explainers.",
                    4145354, "Crypto Learn", 1681010, "6 months", "10 SUI + Attribution", 8),
                ("project-004", "Metaverse Concert", "Music",
                    "Organizing a virtual concert in the metaverse featuring multiple artists and interactive elements.",
                    1105666, "Virtual Venues", 220453, "1 month", "Profit Sharing", 21),
            ]
            .into_iter()
            .map(|(id, title, category, description, image, owner, owner_image, duration, compensation, applicants)| Project {
                id: id.into(),
                title: title.into(),
                category: category.into(),
                description: description.into(),
                image: pexels(image),
                owner: Partner {
                    name: owner.into(),
                    image: pexels(owner_image),
                },
                duration: duration.into(),
                compensation: compensation.into(),
                applicants,
            })
            .collect()
        })
    }

    /// Collaborations the connected creator has taken part in.
    pub fn history() -> &'static [Collaboration] {
        static HISTORY: OnceLock<Vec<Collaboration>> = OnceLock::new();
        HISTORY.get_or_init(|| {
            vec![
                Collaboration {
                    id: "collab-001".into(),
                    title: "AI Art Generator".into(),
                    category: "Technology".into(),
                    partner: Partner {
                        name: "TechInnovators".into(),
                        image: pexels(2379005),
                    },
                    status: CollaborationStatus::Active,
                    start_date: ymd(2025, 3, 10),
                    end_date: ymd(2025, 6, 10),
                    description: "Developing an AI-powered art generator that creates unique digital pieces based on text prompts.".into(),
                    nft_image: pexels(2599244),
                },
                Collaboration {
                    id: "collab-002".into(),
                    title: "Fitness Challenge Series".into(),
                    category: "Health & Fitness".into(),
                    partner: Partner {
                        name: "FitLife".into(),
                        image: pexels(733872),
                    },
                    status: CollaborationStatus::Completed,
                    start_date: ymd(2025, 1, 5),
                    end_date: ymd(2025, 3, 5),
                    description: "Created a 60-day fitness challenge with daily workout videos and nutrition guides.".into(),
                    nft_image: pexels(841130),
                },
                Collaboration {
                    id: "collab-003".into(),
                    title: "NFT Photography Collection".into(),
                    category: "Photography".into(),
                    partner: Partner {
                        name: "James Wilson".into(),
                        image: pexels(220453),
                    },
                    status: CollaborationStatus::Active,
                    start_date: ymd(2025, 2, 20),
                    end_date: ymd(2025, 4, 20),
                    description: "Curating a collection of limited edition photography NFTs featuring urban landscapes.".into(),
                    nft_image: pexels(2174656),
                },
            ]
        })
    }

    pub fn find(id: &str) -> Result<&'static Collaboration> {
        Self::history()
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Collaboration {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects() {
        let projects = CollaborationStore::projects();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[1].owner.name, "MetaArt Studios");
    }

    #[test]
    fn test_find_collaboration() {
        let collab = CollaborationStore::find("collab-003").unwrap();
        assert_eq!(collab.partner.name, "James Wilson");
        assert!(CollaborationStore::find("collab-404").is_err());
    }
}
