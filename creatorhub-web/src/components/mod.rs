//! UI Components

pub mod badges;
pub mod chart;
pub mod connect_prompt;
pub mod dialog;
pub mod footer;
pub mod form;
pub mod header;
pub mod page_header;
pub mod toaster;
pub mod wallet_button;

pub use badges::{PlatformIcons, ScoreBadge};
pub use connect_prompt::ConnectWalletPrompt;
pub use dialog::{ConfirmDialog, Modal};
pub use footer::SiteFooter;
pub use form::{SelectField, TextField};
pub use header::SiteHeader;
pub use page_header::PageHeader;
pub use toaster::Toaster;
pub use wallet_button::WalletButton;
