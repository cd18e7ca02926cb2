//! Application constants

pub const APP_NAME: &str = "CreatorHub";
pub const TAGLINE: &str = "Mint your social media presence, collaborate on projects, and build your creator credit score.";

/// Header navigation: (label, path)
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Creators", "/creators"),
    ("Leaderboard", "/leaderboard"),
    ("Mint NFT", "/mint"),
    ("Collaborate", "/collaborate"),
    ("Profile", "/profile"),
];

/// Footer link columns: (heading, [(label, path)])
pub const FOOTER_COLUMNS: &[(&str, &[(&str, &str)])] = &[
    ("Platform", &[("Home", "/"), ("Creators", "/creators"), ("Leaderboard", "/leaderboard")]),
    ("Features", &[("Mint NFT", "/mint"), ("Collaborate", "/collaborate"), ("Profile", "/profile")]),
    ("Legal", &[("Terms", "#"), ("Privacy", "#"), ("Cookie Policy", "#")]),
];

pub const SOCIAL_LINKS: &[&str] = &["Twitter", "Discord", "GitHub"];

/// Hero highlight cards: (icon, title, description)
pub const HERO_CARDS: &[(&str, &str, &str)] = &[
    ("✦", "Mint Your Social Media", "Transform your social accounts into verified NFTs with reputation metrics"),
    ("◎", "Collaborate & Earn", "Connect with projects and other creators to build your social credit"),
    ("↗", "Climb the Leaderboard", "Gain recognition as your social credit score rises in the ecosystem"),
];

/// Feature grid: (icon, title, description)
pub const FEATURES: &[(&str, &str, &str)] = &[
    ("✦", "Social NFT Minting", "Transform your social media accounts into valuable NFTs that represent your digital identity and influence"),
    ("▤", "Categorized Content", "Create focused categories for your NFTs to better organize your digital presence and reach targeted audiences"),
    ("◎", "Collaboration Platform", "Connect with projects and other creators to build meaningful partnerships authenticated with NFTs"),
    ("★", "Social Credit Scoring", "Build your reputation through verified collaborations and earn a transparent social credit score"),
    ("♛", "Creator Leaderboard", "Compete for recognition as your influence and collaboration history grows within the ecosystem"),
    ("✓", "Verified Collaborations", "Mint, vault, and burn collaboration NFTs as proof of partnerships between creators and projects"),
    ("⛨", "Secure Wallet Integration", "Connect with Sui wallet for seamless transactions and NFT management with full security"),
    ("◔", "Creator Analytics", "Access detailed insights about your performance, engagement, and social credit metrics"),
];
