//! "Create a Collaboration Proposal" dialog.

use std::fmt;
use std::str::FromStr;

use lib_utils::validation::{validate_min_length, validate_required};
use serde::{Deserialize, Serialize};
use shared::UnknownVariant;

use super::FieldErrors;
use crate::notify::Toast;

pub const FIELD_PROJECT_NAME: &str = "project_name";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_DURATION: &str = "duration";
pub const FIELD_COMPENSATION: &str = "compensation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalCategory {
    Art,
    Music,
    Gaming,
    DeFi,
    Education,
    Technology,
    Metaverse,
}

impl ProposalCategory {
    pub const ALL: [ProposalCategory; 7] = [
        ProposalCategory::Art,
        ProposalCategory::Music,
        ProposalCategory::Gaming,
        ProposalCategory::DeFi,
        ProposalCategory::Education,
        ProposalCategory::Technology,
        ProposalCategory::Metaverse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProposalCategory::Art => "Art",
            ProposalCategory::Music => "Music",
            ProposalCategory::Gaming => "Gaming",
            ProposalCategory::DeFi => "DeFi",
            ProposalCategory::Education => "Education",
            ProposalCategory::Technology => "Technology",
            ProposalCategory::Metaverse => "Metaverse",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ProposalCategory::Art => "art",
            ProposalCategory::Music => "music",
            ProposalCategory::Gaming => "gaming",
            ProposalCategory::DeFi => "defi",
            ProposalCategory::Education => "education",
            ProposalCategory::Technology => "technology",
            ProposalCategory::Metaverse => "metaverse",
        }
    }
}

impl fmt::Display for ProposalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProposalCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalForm {
    pub project_name: String,
    pub category: Option<ProposalCategory>,
    pub description: String,
    pub duration: String,
    pub compensation: String,
}

impl ProposalForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(FIELD_PROJECT_NAME, validate_min_length(&self.project_name, 2, "Project name"));
        errors.check(
            FIELD_CATEGORY,
            self.category.map(|_| ()).ok_or_else(|| "Please select a category".to_string()),
        );
        errors.check(FIELD_DESCRIPTION, validate_min_length(&self.description, 20, "Description"));
        errors.check(FIELD_DURATION, validate_required(&self.duration, "Please specify the duration"));
        errors.check(
            FIELD_COMPENSATION,
            validate_required(&self.compensation, "Please specify the compensation"),
        );
        errors.into_result()
    }

    /// Validate and submit. The caller closes the dialog and resets the form on success.
    pub fn submit(&self) -> Result<Toast, FieldErrors> {
        self.validate()?;
        tracing::info!(project = %self.project_name, category = ?self.category, "collaboration proposal created");
        Ok(Toast::success("Collaboration proposal created"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProposalForm {
        ProposalForm {
            project_name: "NFT Collection Launch".into(),
            category: Some(ProposalCategory::Art),
            description: "Generative art collection with 10,000 pieces".into(),
            duration: "2 months".into(),
            compensation: "Revenue Split (70/30)".into(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let toast = valid().submit().unwrap();
        assert_eq!(toast.title, "Collaboration proposal created");
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ProposalForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(FIELD_PROJECT_NAME), Some("Project name must be at least 2 characters"));
        assert_eq!(errors.get(FIELD_CATEGORY), Some("Please select a category"));
        assert_eq!(errors.get(FIELD_DESCRIPTION), Some("Description must be at least 20 characters"));
        assert_eq!(errors.get(FIELD_DURATION), Some("Please specify the duration"));
        assert_eq!(errors.get(FIELD_COMPENSATION), Some("Please specify the compensation"));
    }

    #[test]
    fn test_short_description_rejected() {
        let form = ProposalForm {
            description: "Too short".into(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(FIELD_DESCRIPTION));
    }

    #[test]
    fn test_category_slugs() {
        assert_eq!("defi".parse::<ProposalCategory>(), Ok(ProposalCategory::DeFi));
        assert_eq!(ProposalCategory::DeFi.label(), "DeFi");
        assert!("finance".parse::<ProposalCategory>().is_err());
    }
}
