//! # Collaboration History
//!
//! Status tabs over the connected creator's collaborations and the actions
//! available on an active one.

use shared::{Collaboration, CollaborationStatus};

use crate::error::{AppError, Result};
use crate::notify::Toast;

/// Shown when a tab has no collaborations.
pub const EMPTY_MESSAGE: &str = "No collaborations found with the selected status.";

/// Shown before a collaboration is terminated.
pub const TERMINATE_WARNING: &str = "Terminating this collaboration will burn the collaboration NFT and may negatively impact your social credit score.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusTab {
    #[default]
    Active,
    Completed,
    All,
}

impl StatusTab {
    pub const ALL: [StatusTab; 3] = [StatusTab::Active, StatusTab::Completed, StatusTab::All];

    pub fn label(&self) -> &'static str {
        match self {
            StatusTab::Active => "Active",
            StatusTab::Completed => "Completed",
            StatusTab::All => "All",
        }
    }

    pub fn includes(&self, status: CollaborationStatus) -> bool {
        match self {
            StatusTab::Active => status == CollaborationStatus::Active,
            StatusTab::Completed => status == CollaborationStatus::Completed,
            StatusTab::All => true,
        }
    }
}

pub fn filter_collaborations(collaborations: &[Collaboration], tab: StatusTab) -> Vec<&Collaboration> {
    collaborations.iter().filter(|c| tab.includes(c.status)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaborationAction {
    Complete,
    /// Burns the collaboration NFT. The view asks for confirmation first.
    Terminate,
}

impl CollaborationAction {
    /// Actions offered for a collaboration in `status`.
    pub fn available(status: CollaborationStatus) -> &'static [CollaborationAction] {
        match status {
            CollaborationStatus::Active => &[CollaborationAction::Complete, CollaborationAction::Terminate],
            CollaborationStatus::Completed => &[],
        }
    }

    pub fn requires_confirmation(&self) -> bool {
        matches!(self, CollaborationAction::Terminate)
    }

    /// Apply the action and return the toast to show.
    pub fn perform(&self, collaboration: &Collaboration) -> Result<Toast> {
        if !Self::available(collaboration.status).contains(self) {
            return Err(AppError::Validation(format!(
                "{} is already {}",
                collaboration.title,
                collaboration.status.label().to_lowercase()
            )));
        }

        tracing::info!(id = %collaboration.id, action = ?self, "collaboration action");
        Ok(match self {
            CollaborationAction::Complete => Toast::success("Collaboration Completed"),
            CollaborationAction::Terminate => Toast::destructive("Collaboration Terminated"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeKind;
    use crate::store::CollaborationStore;

    #[test]
    fn test_tabs() {
        let history = CollaborationStore::history();
        assert_eq!(filter_collaborations(history, StatusTab::Active).len(), 2);
        assert_eq!(filter_collaborations(history, StatusTab::Completed).len(), 1);
        assert_eq!(filter_collaborations(history, StatusTab::All).len(), 3);
    }

    #[test]
    fn test_actions_only_for_active() {
        assert_eq!(CollaborationAction::available(CollaborationStatus::Active).len(), 2);
        assert!(CollaborationAction::available(CollaborationStatus::Completed).is_empty());
    }

    #[test]
    fn test_perform_on_active() {
        let active = CollaborationStore::find("collab-001").unwrap();

        let done = CollaborationAction::Complete.perform(active).unwrap();
        assert_eq!(done.title, "Collaboration Completed");
        assert_eq!(done.kind, NoticeKind::Success);

        let burned = CollaborationAction::Terminate.perform(active).unwrap();
        assert_eq!(burned.title, "Collaboration Terminated");
        assert_eq!(burned.kind, NoticeKind::Destructive);
        assert!(CollaborationAction::Terminate.requires_confirmation());
    }

    #[test]
    fn test_perform_on_completed_rejected() {
        let completed = CollaborationStore::find("collab-002").unwrap();
        assert!(CollaborationAction::Complete.perform(completed).is_err());
    }
}
