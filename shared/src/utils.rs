//! # Shared Utility Functions
//!
//! Common utility functions used across lib-core and creatorhub-web.
//!
//! ## Address Formatting
//!
//! Functions for formatting wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the header's 6/4 split
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x7f39Eb4C3A27c492c22AB7e1CeCF7134068f48B3";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x7f39...48B3");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x7f39Eb4C3A27c492c22AB7e1CeCF7134068f48B3";
/// assert_eq!(format_address(addr, 4, 4), "0x7f...48B3");
/// assert_eq!(format_address(addr, 6, 6), "0x7f39...8f48B3");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    // ASCII-only, so byte offsets are char boundaries
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with a 6-character prefix (`0x` plus four hex digits)
/// and a 4-character suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x7f39Eb4C3A27c492c22AB7e1CeCF7134068f48B3";
/// assert_eq!(truncate_address(addr), "0x7f39...48B3");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x7f39Eb4C3A27c492c22AB7e1CeCF7134068f48B3";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 4, 4), "0x7f...48B3");
        assert_eq!(format_address(ADDR, 2, 2), "0x...B3");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abcdefghij", 6, 4), "abcdefghij");
    }

    #[test]
    fn test_format_address_non_ascii_untouched() {
        assert_eq!(format_address("ééééééééééééé", 2, 2), "ééééééééééééé");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "0x7f39...48B3");
    }
}
