//! "Edit Profile" dialog.

use lib_utils::validation::{validate_max_length, validate_min_length, validate_optional_url};
use shared::{Category, Profile};

use super::FieldErrors;
use crate::notify::Toast;

pub const FIELD_NAME: &str = "name";
pub const FIELD_HANDLE: &str = "handle";
pub const FIELD_BIO: &str = "bio";
pub const FIELD_AVATAR_URL: &str = "avatar_url";
pub const FIELD_BANNER_URL: &str = "banner_url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub handle: String,
    pub bio: String,
    pub category: Category,
    pub avatar_url: String,
    pub banner_url: String,
}

impl ProfileForm {
    /// Prefill from the current profile.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            handle: profile.handle.clone(),
            bio: profile.bio.clone(),
            category: profile.category,
            avatar_url: profile.avatar.clone(),
            banner_url: profile.banner.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(FIELD_NAME, validate_min_length(&self.name, 2, "Name"));
        errors.check(FIELD_HANDLE, validate_min_length(&self.handle, 2, "Handle"));
        errors.check(FIELD_BIO, validate_max_length(&self.bio, super::mint::BIO_MAX, "Bio"));
        errors.check(FIELD_AVATAR_URL, validate_optional_url(&self.avatar_url));
        errors.check(FIELD_BANNER_URL, validate_optional_url(&self.banner_url));
        errors.into_result()
    }

    /// Validate and apply to `profile`.
    ///
    /// Blank image URLs keep the current image.
    pub fn apply(&self, profile: &mut Profile) -> Result<Toast, FieldErrors> {
        self.validate()?;

        profile.name = self.name.clone();
        profile.handle = self.handle.clone();
        profile.bio = self.bio.clone();
        profile.category = self.category;
        if !self.avatar_url.trim().is_empty() {
            profile.avatar = self.avatar_url.trim().to_string();
        }
        if !self.banner_url.trim().is_empty() {
            profile.banner = self.banner_url.trim().to_string();
        }

        tracing::info!(handle = %profile.handle, "profile updated");
        Ok(Toast::success("Profile updated"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CreatorStore;

    #[test]
    fn test_prefilled_form_is_valid() {
        let form = ProfileForm::from_profile(CreatorStore::profile());
        assert!(form.validate().is_ok());
        assert_eq!(form.category, Category::DigitalArt);
    }

    #[test]
    fn test_empty_urls_accepted() {
        let mut profile = CreatorStore::profile().clone();
        let form = ProfileForm {
            avatar_url: String::new(),
            banner_url: "  ".into(),
            name: "Alex M.".into(),
            ..ProfileForm::from_profile(&profile)
        };

        let toast = form.apply(&mut profile).unwrap();
        assert_eq!(toast.title, "Profile updated");
        assert_eq!(profile.name, "Alex M.");
        assert_eq!(profile.avatar, CreatorStore::profile().avatar);
    }

    #[test]
    fn test_invalid_fields_leave_profile_untouched() {
        let mut profile = CreatorStore::profile().clone();
        let form = ProfileForm {
            handle: "@".into(),
            avatar_url: "avatar".into(),
            ..ProfileForm::from_profile(&profile)
        };

        let errors = form.apply(&mut profile).unwrap_err();
        assert_eq!(errors.get(FIELD_HANDLE), Some("Handle must be at least 2 characters"));
        assert_eq!(errors.get(FIELD_AVATAR_URL), Some("Please enter a valid URL"));
        assert_eq!(&profile, CreatorStore::profile());
    }
}
