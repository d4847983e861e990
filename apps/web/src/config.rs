use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_BASE;

/// Application configuration loaded from environment variables.
/// A missing API key is not a startup error: every submission fails until one is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_mb: usize,
    pub session_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            gemini_api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
            gemini_api_base: var("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            port: parse_or("PORT", var("PORT"), 8080)?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_mb: parse_or("MAX_UPLOAD_MB", var("MAX_UPLOAD_MB"), 32)?,
            session_ttl_secs: parse_or("SESSION_TTL_SECS", var("SESSION_TTL_SECS"), 3600)?,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{v}'")),
        None => Ok(default),
    }
}
