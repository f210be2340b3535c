//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (site address, asset paths) come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables instead.

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive
    /// Example: info,triade=debug
    pub log_filter: String,

    /// Serve `.br` / `.gz` siblings of bundle files when the client accepts them
    pub serve_precompressed: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("RUST_LOG")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            serve_precompressed: lookup("SERVE_PRECOMPRESSED")
                .and_then(|value| parse_flag(&value))
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse a boolean-ish environment value.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_with(&[]);

        assert_eq!(config.log_filter, "info");
        assert!(config.serve_precompressed);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = config_with(&[
            ("RUST_LOG", "warn,triade=debug"),
            ("SERVE_PRECOMPRESSED", "false"),
        ]);

        assert_eq!(config.log_filter, "warn,triade=debug");
        assert!(!config.serve_precompressed);
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = config_with(&[("RUST_LOG", "   ")]);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_unparseable_flag_keeps_default() {
        let config = config_with(&[("SERVE_PRECOMPRESSED", "sometimes")]);
        assert!(config.serve_precompressed);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("on"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        assert!(!config.log_filter.is_empty());
    }

    #[test]
    fn test_config_debug() {
        let config = config_with(&[("RUST_LOG", "debug")]);
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("log_filter"));
        assert!(debug_str.contains("debug"));
    }
}
