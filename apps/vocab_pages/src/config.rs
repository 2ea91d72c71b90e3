use anyhow::{Context, Result};

const DEFAULT_NOTION_API_BASE: &str = "https://api.notion.com";
const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com";

/// Batch configuration loaded from environment variables.
/// Fails at startup if any of the three credentials is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub notion_api_key: String,
    pub notion_database_id: String,
    pub openai_api_key: String,
    pub notion_api_base: String,
    pub openai_api_base: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from a key lookup; `from_env` backs it with the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            notion_api_key: require_var(&lookup, "NOTION_API_KEY")?,
            notion_database_id: require_var(&lookup, "NOTION_DATABASE_ID")?,
            openai_api_key: require_var(&lookup, "OPENAI_API_KEY")?,
            notion_api_base: optional_var(&lookup, "NOTION_API_BASE", DEFAULT_NOTION_API_BASE),
            openai_api_base: optional_var(&lookup, "OPENAI_API_BASE", DEFAULT_OPENAI_API_BASE),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_required_vars_and_defaults() {
        let config = config_from(&[
            ("NOTION_API_KEY", "secret_notion"),
            ("NOTION_DATABASE_ID", "db123"),
            ("OPENAI_API_KEY", "sk-test"),
        ])
        .unwrap();

        assert_eq!(config.notion_api_key, "secret_notion");
        assert_eq!(config.notion_database_id, "db123");
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.notion_api_base, "https://api.notion.com");
        assert_eq!(config.openai_api_base, "https://api.openai.com");
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_database_id_names_the_variable() {
        let err = config_from(&[
            ("NOTION_API_KEY", "secret_notion"),
            ("OPENAI_API_KEY", "sk-test"),
        ])
        .unwrap_err();

        assert!(err.to_string().contains("NOTION_DATABASE_ID"));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_env_ignores_non_utf8_variables() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        // from_env must only read the keys it needs, never iterate the whole environment
        std::env::set_var("VOCAB_PAGES_TEST_BINARY", OsStr::from_bytes(b"\xff\xfe"));
        let result = std::panic::catch_unwind(Config::from_env);
        std::env::remove_var("VOCAB_PAGES_TEST_BINARY");

        assert!(result.is_ok(), "from_env panicked on a non-UTF-8 variable");
    }

    #[test]
    fn test_base_url_override_drops_trailing_slash() {
        let config = config_from(&[
            ("NOTION_API_KEY", "k"),
            ("NOTION_DATABASE_ID", "d"),
            ("OPENAI_API_KEY", "o"),
            ("NOTION_API_BASE", "http://127.0.0.1:9000/"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();

        assert_eq!(config.notion_api_base, "http://127.0.0.1:9000");
        assert_eq!(config.rust_log, "debug");
    }
}
