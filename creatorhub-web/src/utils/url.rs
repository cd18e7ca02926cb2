//! URL utility functions for reading query parameters

use lib_core::config::SessionConfig;
use web_sys::window;

/// Get a query parameter from the current URL
///
/// Reads `window.location.search` directly, so it works before the router is mounted.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    find_param(&search, key)
}

/// Look up `key` in a raw query string such as `?a=1&b=2`.
pub fn find_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    query_string.split('&').find_map(|pair| {
        let (param_key, param_value) = pair.split_once('=').unwrap_or((pair, ""));
        (param_key == key).then(|| {
            urlencoding::decode(param_value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| param_value.to_string())
        })
    })
}

/// Session configuration from the page query string.
///
/// Invalid overrides are logged and the defaults are used instead.
pub fn load_session_config() -> SessionConfig {
    match SessionConfig::from_lookup(get_query_param) {
        Ok(config) => {
            log::debug!("Session config: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Ignoring query overrides: {}", e);
            SessionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_param() {
        let search = "?connect_delay_ms=250&mock_address=0x7f39%45b4&flag";
        assert_eq!(find_param(search, "connect_delay_ms").as_deref(), Some("250"));
        assert_eq!(find_param(search, "mock_address").as_deref(), Some("0x7f39Eb4"));
        assert_eq!(find_param(search, "flag").as_deref(), Some(""));
        assert_eq!(find_param(search, "missing"), None);
        assert_eq!(find_param("", "flag"), None);
    }
}
