//! Three-step wizard for minting a social account NFT.
//!
//! The wizard only moves forward when every field of the current step is
//! valid. Submitting simulates the mint call with the configured delay.

use std::time::Duration;

use lib_utils::validation::{
    validate_max_length, validate_min_length, validate_optional_url, validate_url,
};
use shared::{Category, Platform};

use super::FieldErrors;
use crate::error::{AppError, Result};
use crate::notify::Toast;
use crate::session::Timer;

pub const FIELD_PLATFORM: &str = "platform";
pub const FIELD_ACCOUNT_URL: &str = "account_url";
pub const FIELD_DISPLAY_NAME: &str = "display_name";
pub const FIELD_USERNAME: &str = "username";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_BIO: &str = "bio";
pub const FIELD_AVATAR_URL: &str = "avatar_url";
pub const FIELD_BANNER_URL: &str = "banner_url";

pub const BIO_MAX: usize = 280;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MintStep {
    #[default]
    Account,
    Profile,
    Media,
}

impl MintStep {
    pub const ALL: [MintStep; 3] = [MintStep::Account, MintStep::Profile, MintStep::Media];

    /// 1-based position shown in the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            MintStep::Account => 1,
            MintStep::Profile => 2,
            MintStep::Media => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MintStep::Account => "Select Platform",
            MintStep::Profile => "Profile Details",
            MintStep::Media => "Media",
        }
    }

    fn next(self) -> Option<MintStep> {
        match self {
            MintStep::Account => Some(MintStep::Profile),
            MintStep::Profile => Some(MintStep::Media),
            MintStep::Media => None,
        }
    }

    fn prev(self) -> Option<MintStep> {
        match self {
            MintStep::Account => None,
            MintStep::Profile => Some(MintStep::Account),
            MintStep::Media => Some(MintStep::Profile),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintForm {
    pub platform: Option<Platform>,
    pub account_url: String,
    pub display_name: String,
    pub username: String,
    pub category: Option<Category>,
    pub bio: String,
    pub avatar_url: String,
    pub banner_url: String,
}

impl MintForm {
    /// Validate the fields that belong to `step`.
    pub fn validate_step(&self, step: MintStep) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            MintStep::Account => {
                errors.check(FIELD_PLATFORM, required(self.platform, "Please select a platform"));
                errors.check(FIELD_ACCOUNT_URL, validate_url(&self.account_url));
            }
            MintStep::Profile => {
                errors.check(FIELD_DISPLAY_NAME, validate_min_length(&self.display_name, 2, "Display name"));
                errors.check(FIELD_USERNAME, validate_min_length(&self.username, 2, "Username"));
                errors.check(FIELD_CATEGORY, required(self.category, "Please select a category"));
                errors.check(FIELD_BIO, validate_max_length(&self.bio, BIO_MAX, "Bio"));
            }
            MintStep::Media => {
                errors.check(FIELD_AVATAR_URL, validate_optional_url(&self.avatar_url));
                errors.check(FIELD_BANNER_URL, validate_optional_url(&self.banner_url));
            }
        }
        errors
    }

    /// Validate every step.
    pub fn validate(&self) -> std::result::Result<(), FieldErrors> {
        let mut all = FieldErrors::new();
        for step in MintStep::ALL {
            for (field, message) in self.validate_step(step).iter() {
                all.check(field, Err(message.to_string()));
            }
        }
        all.into_result()
    }
}

fn required<T>(value: Option<T>, message: &str) -> std::result::Result<(), String> {
    value.map(|_| ()).ok_or_else(|| message.to_string())
}

/// Form state plus the step the user is on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintWizard {
    form: MintForm,
    step: MintStep,
    errors: FieldErrors,
}

impl MintWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> MintStep {
        self.step
    }

    pub fn form(&self) -> &MintForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MintForm {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_last_step(&self) -> bool {
        self.step.next().is_none()
    }

    /// Move to the next step if the current one validates.
    ///
    /// Returns whether the wizard moved. Errors for the current step are kept
    /// for display either way.
    pub fn advance(&mut self) -> bool {
        self.errors = self.form.validate_step(self.step);
        if !self.errors.is_empty() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Entered values are kept.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
            self.errors.clear();
        }
    }

    /// Validate the whole form before submission.
    pub fn check_submit(&mut self) -> bool {
        match self.form.validate() {
            Ok(()) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Empty every field and return to the first step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Simulate minting `form` as an NFT.
pub async fn mint(form: &MintForm, timer: &dyn Timer, delay: Duration) -> Result<()> {
    form.validate().map_err(AppError::from)?;

    tracing::info!(
        platform = ?form.platform,
        username = %form.username,
        "minting creator NFT"
    );
    timer.sleep(delay).await;
    Ok(())
}

/// Toast for a finished mint call.
pub fn mint_notice(result: &Result<()>) -> Toast {
    match result {
        Ok(()) => Toast::success("NFT Minting Successful"),
        Err(_) => Toast::destructive("Minting Failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeKind;
    use async_trait::async_trait;

    struct TokioTimer;

    #[async_trait(?Send)]
    impl Timer for TokioTimer {
        async fn sleep(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    fn filled() -> MintForm {
        MintForm {
            platform: Some(Platform::Twitter),
            account_url: "https://twitter.com/alexmorganart".into(),
            display_name: "Alex Morgan".into(),
            username: "@alexmorganart".into(),
            category: Some(Category::DigitalArt),
            bio: "Digital artist".into(),
            avatar_url: String::new(),
            banner_url: String::new(),
        }
    }

    #[test]
    fn test_step_one_blocks_until_valid() {
        let mut wizard = MintWizard::new();
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), MintStep::Account);
        assert_eq!(wizard.errors().get(FIELD_PLATFORM), Some("Please select a platform"));
        assert_eq!(wizard.errors().get(FIELD_ACCOUNT_URL), Some("Please enter a valid URL"));

        wizard.form_mut().platform = Some(Platform::Instagram);
        wizard.form_mut().account_url = "https://instagram.com/alex".into();
        assert!(wizard.advance());
        assert_eq!(wizard.step(), MintStep::Profile);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_step_two_messages() {
        let form = MintForm {
            display_name: "A".into(),
            username: "b".into(),
            bio: "x".repeat(281),
            ..filled()
        };
        let errors = form.validate_step(MintStep::Profile);
        assert_eq!(errors.get(FIELD_DISPLAY_NAME), Some("Display name must be at least 2 characters"));
        assert_eq!(errors.get(FIELD_USERNAME), Some("Username must be at least 2 characters"));
        assert_eq!(errors.get(FIELD_BIO), Some("Bio must be 280 characters or less"));

        let no_category = MintForm {
            category: None,
            ..filled()
        };
        assert_eq!(
            no_category.validate_step(MintStep::Profile).get(FIELD_CATEGORY),
            Some("Please select a category")
        );
    }

    #[test]
    fn test_media_urls_optional() {
        let mut form = filled();
        assert!(form.validate_step(MintStep::Media).is_empty());

        form.banner_url = "banner.jpg".into();
        assert!(form.validate_step(MintStep::Media).contains(FIELD_BANNER_URL));
    }

    #[test]
    fn test_back_keeps_values_and_reset_clears() {
        let mut wizard = MintWizard::new();
        *wizard.form_mut() = filled();
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert!(wizard.is_last_step());
        assert!(!wizard.advance());

        wizard.back();
        assert_eq!(wizard.step(), MintStep::Profile);
        assert_eq!(wizard.form().display_name, "Alex Morgan");

        wizard.reset();
        assert_eq!(wizard, MintWizard::new());
    }

    #[test]
    fn test_back_on_first_step_is_noop() {
        let mut wizard = MintWizard::new();
        wizard.back();
        assert_eq!(wizard.step(), MintStep::Account);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mint_waits_delay_then_succeeds() {
        let started = tokio::time::Instant::now();
        let result = mint(&filled(), &TokioTimer, Duration::from_millis(2000)).await;
        assert!(result.is_ok());
        assert_eq!(started.elapsed(), Duration::from_millis(2000));
        assert_eq!(mint_notice(&result).title, "NFT Minting Successful");
    }

    #[tokio::test(start_paused = true)]
    async fn test_mint_invalid_form_fails() {
        let result = mint(&MintForm::default(), &TokioTimer, Duration::from_millis(2000)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let toast = mint_notice(&result);
        assert_eq!(toast.title, "Minting Failed");
        assert_eq!(toast.kind, NoticeKind::Destructive);
    }
}
