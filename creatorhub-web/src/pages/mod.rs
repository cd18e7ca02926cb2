//! Page modules

pub mod collaborate;
pub mod creator_detail;
pub mod creators;
pub mod home;
pub mod leaderboard;
pub mod mint;
pub mod profile;

pub use collaborate::CollaboratePage;
pub use creator_detail::CreatorDetailPage;
pub use creators::CreatorsPage;
pub use home::HomePage;
pub use leaderboard::LeaderboardPage;
pub use mint::MintPage;
pub use profile::ProfilePage;
