//! # Forms
//!
//! Validation for the mint wizard, the collaboration proposal dialog and the
//! profile editor. Failures are collected per field and shown inline next to
//! the offending input; they never leave the form.

pub mod mint;
pub mod profile;
pub mod proposal;

pub use mint::{MintForm, MintStep, MintWizard};
pub use profile::ProfileForm;
pub use proposal::{ProposalCategory, ProposalForm};

use std::collections::BTreeMap;
use std::fmt;

use crate::error::AppError;

/// First validation message for each invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a validator for `field`. Earlier messages win.
    pub fn check(&mut self, field: &'static str, outcome: Result<(), String>) {
        if let Err(message) = outcome {
            self.0.entry(field).or_insert(message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok` when no field failed.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.check("name", Err("Name must be at least 2 characters".into()));
        errors.check("name", Err("second".into()));
        errors.check("bio", Ok(()));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
        assert!(!errors.contains("bio"));
    }

    #[test]
    fn test_into_app_error() {
        let mut errors = FieldErrors::new();
        errors.check("handle", Err("Handle must be at least 2 characters".into()));
        let err: AppError = errors.into_result().unwrap_err().into();
        assert_eq!(
            err,
            AppError::Validation("handle: Handle must be at least 2 characters".into())
        );
    }
}
