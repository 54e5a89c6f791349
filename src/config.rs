use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub fda_api_key: String,
    pub openai_api_key: String,
    pub fda_base_url: String,
    pub openai_base_url: String,
    pub recall_year: i32,
    pub recall_limit: u32,
    pub llm_model: String,
    pub output_dir: PathBuf,
}

impl Config {
    /// Reads configuration from the process environment, seeded from `.env`
    /// if one exists. Both API keys are required; everything else defaults.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        Ok(Self {
            environment: lookup("RECALL_ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            fda_api_key: required(&lookup, "FDA_API_KEY")?,
            openai_api_key: required(&lookup, "OPENAI_API_KEY")?,
            fda_base_url: lookup("FDA_BASE_URL")
                .unwrap_or_else(|| "https://api.fda.gov".to_string()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com".to_string()),
            recall_year: parse_or(&lookup, "RECALL_YEAR", 2024)?,
            recall_limit: parse_or(&lookup, "RECALL_LIMIT", 1000)?,
            llm_model: lookup("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            output_dir: lookup("REPORT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> AppResult<String> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(AppError::Config(format!("{key} is set but empty"))),
        None => Err(AppError::Config(format!("{key} must be set"))),
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> AppResult<T> {
    match lookup(key) {
        Some(value) => value
            .parse()
            .map_err(|_| AppError::Config(format!("{key} must be a number, got `{value}`"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(vars: HashMap<String, String>) -> AppResult<Config> {
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = load(env(&[("FDA_API_KEY", "fda-key"), ("OPENAI_API_KEY", "oa-key")]))
            .expect("config should load");

        assert_eq!(config.fda_api_key, "fda-key");
        assert_eq!(config.openai_api_key, "oa-key");
        assert_eq!(config.fda_base_url, "https://api.fda.gov");
        assert_eq!(config.openai_base_url, "https://api.openai.com");
        assert_eq!(config.recall_year, 2024);
        assert_eq!(config.recall_limit, 1000);
        assert_eq!(config.llm_model, "gpt-4o-mini");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.is_production());
    }

    #[test]
    fn test_missing_fda_key_fails() {
        let err = load(env(&[("OPENAI_API_KEY", "oa-key")])).unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.contains("FDA_API_KEY")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_openai_key_fails() {
        let err = load(env(&[("FDA_API_KEY", "fda-key")])).unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.contains("OPENAI_API_KEY")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_secret_fails() {
        let err = load(env(&[("FDA_API_KEY", "  "), ("OPENAI_API_KEY", "oa-key")])).unwrap_err();
        match err {
            AppError::Config(msg) => {
                assert!(msg.contains("FDA_API_KEY"));
                assert!(msg.contains("empty"));
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_overrides_applied() {
        let config = load(env(&[
            ("FDA_API_KEY", "fda-key"),
            ("OPENAI_API_KEY", "oa-key"),
            ("RECALL_YEAR", "2023"),
            ("RECALL_LIMIT", "250"),
            ("OPENAI_MODEL", "gpt-4.1"),
            ("FDA_BASE_URL", "http://localhost:9999"),
            ("REPORT_OUTPUT_DIR", "/tmp/reports"),
            ("RECALL_ENVIRONMENT", "production"),
        ]))
        .expect("config should load");

        assert_eq!(config.recall_year, 2023);
        assert_eq!(config.recall_limit, 250);
        assert_eq!(config.llm_model, "gpt-4.1");
        assert_eq!(config.fda_base_url, "http://localhost:9999");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
        assert!(config.is_production());
    }

    #[tokio::test]
    async fn test_missing_secret_fails_before_any_network_call() {
        let server = wiremock::MockServer::start().await;

        let result = load(env(&[
            ("OPENAI_API_KEY", "oa-key"),
            ("FDA_BASE_URL", &server.uri()),
        ]));

        assert!(matches!(result, Err(AppError::Config(_))));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn test_non_numeric_limit_fails() {
        let err = load(env(&[
            ("FDA_API_KEY", "fda-key"),
            ("OPENAI_API_KEY", "oa-key"),
            ("RECALL_LIMIT", "lots"),
        ]))
        .unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.contains("RECALL_LIMIT")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
