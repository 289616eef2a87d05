use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on unparseable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub model_path: PathBuf,
    pub vectorizer_path: PathBuf,
    pub prediction_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub preload_model: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            model_path: env_or("MODEL_PATH", "artifacts/model.json").into(),
            vectorizer_path: env_or("VECTORIZER_PATH", "artifacts/tfidf_vectorizer.json").into(),
            prediction_timeout_secs: parse_env("PREDICTION_TIMEOUT_SECS", 30)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            preload_model: parse_env("PRELOAD_MODEL", false)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            model_path: "artifacts/model.json".into(),
            vectorizer_path: "artifacts/tfidf_vectorizer.json".into(),
            prediction_timeout_secs: 30,
            max_upload_bytes: 10 * 1024 * 1024,
            preload_model: false,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names; the process environment is shared
    // between test threads.

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u64 = parse_env("INTERVIEW_API_TEST_UNSET_TIMEOUT", 30).unwrap();
        assert_eq!(value, 30);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("INTERVIEW_API_TEST_PRELOAD", " true ");
        let value: bool = parse_env("INTERVIEW_API_TEST_PRELOAD", false).unwrap();
        assert!(value);
    }

    #[test]
    fn test_parse_env_rejects_garbage_and_names_variable() {
        std::env::set_var("INTERVIEW_API_TEST_PORT", "eighty");
        let err = parse_env::<u16>("INTERVIEW_API_TEST_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("INTERVIEW_API_TEST_PORT"));
    }
}
