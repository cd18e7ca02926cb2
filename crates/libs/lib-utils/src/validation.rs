//! # Validation Utilities
//!
//! Input validation helpers. Each helper returns the message shown next to the
//! offending form field. Lengths are counted in characters, not bytes.

use url::Url;

/// Message shown for any malformed URL field.
pub const INVALID_URL: &str = "Please enter a valid URL";

/// Validate that a value is present (non-blank).
pub fn validate_required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validate minimum length.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

/// Validate maximum length.
pub fn validate_max_length(value: &str, max: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() > max {
        Err(format!("{} must be {} characters or less", field_name, max))
    } else {
        Ok(())
    }
}

/// Validate that a value is an absolute `http`/`https` URL with a host.
pub fn validate_url(value: &str) -> Result<(), String> {
    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => Ok(()),
        _ => Err(INVALID_URL.to_string()),
    }
}

/// Validate an optional URL field: blank is accepted, anything else must be a URL.
pub fn validate_optional_url(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        validate_url(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("twitter", "Please select a platform").is_ok());
        assert_eq!(
            validate_required("   ", "Please select a platform"),
            Err("Please select a platform".to_string())
        );
    }

    #[test]
    fn test_min_length_message() {
        assert!(validate_min_length("Al", 2, "Display name").is_ok());
        assert_eq!(
            validate_min_length("A", 2, "Display name"),
            Err("Display name must be at least 2 characters".to_string())
        );
    }

    #[test]
    fn test_max_length_counts_chars() {
        let bio = "é".repeat(280);
        assert!(validate_max_length(&bio, 280, "Bio").is_ok());
        assert_eq!(
            validate_max_length(&format!("{bio}x"), 280, "Bio"),
            Err("Bio must be 280 characters or less".to_string())
        );
    }

    #[test]
    fn test_url() {
        assert!(validate_url("https://twitter.com/alexmorganart").is_ok());
        assert!(validate_url("http://example.com/avatar.jpg").is_ok());
        assert!(validate_url("twitter.com/alex").is_err());
        assert!(validate_url("mailto:alex@example.com").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn test_optional_url() {
        assert!(validate_optional_url("").is_ok());
        assert!(validate_optional_url("not a url").is_err());
    }
}
