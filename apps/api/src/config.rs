use anyhow::{bail, Context, Result};

use crate::llm_client::{DEFAULT_API_BASE, DEFAULT_MODEL};

const DEFAULT_EXTRACTION_WORKERS: usize = 2;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup aborts if `GEMINI_KEY` is missing or any value fails to parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    /// Capacity of the blocking pool used for text extraction.
    pub extraction_workers: usize,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_process_env()
    }

    /// Reads the process environment only, without consulting `.env`.
    fn from_process_env() -> Result<Self> {
        let extraction_workers = parse_env("EXTRACTION_WORKERS", DEFAULT_EXTRACTION_WORKERS)?;
        if extraction_workers == 0 {
            bail!("EXTRACTION_WORKERS must be at least 1");
        }

        Ok(Config {
            gemini_api_key: require_env("GEMINI_KEY")?,
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            port: parse_env("PORT", 8000)?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            extraction_workers,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}
