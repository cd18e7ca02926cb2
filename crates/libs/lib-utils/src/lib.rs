//! # Utilities Library
//!
//! Shared helpers for form field validation and date display.

pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use time::{current_year, format_date_range, format_long_date, format_month_year};
pub use validation::{
    validate_max_length, validate_min_length, validate_optional_url, validate_required, validate_url,
};
