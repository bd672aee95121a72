use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search";
const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Application configuration loaded from environment variables.
/// Built once at startup and handed to every client that talks to an upstream API.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_url: String,
    pub serpapi_key: String,
    pub serpapi_url: String,
    pub youtube_api_key: String,
    pub youtube_api_url: String,
    pub port: u16,
    pub rust_log: String,
    pub session_ttl_minutes: i64,
    pub max_upload_bytes: usize,
    pub search_timeout_secs: u64,
    pub video_timeout_secs: u64,
    pub llm_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: env_or("GEMINI_MODEL", "gemini-2.5-flash"),
            gemini_api_url: env_or("GEMINI_API_URL", DEFAULT_GEMINI_API_URL),
            serpapi_key: require_env("SERPAPI_KEY")?,
            serpapi_url: env_or("SERPAPI_URL", DEFAULT_SERPAPI_URL),
            youtube_api_key: require_env("YOUTUBE_API_KEY")?,
            youtube_api_url: env_or("YOUTUBE_API_URL", DEFAULT_YOUTUBE_API_URL),
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            session_ttl_minutes: parse_env("SESSION_TTL_MINUTES", 120)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 16 * 1024 * 1024)?,
            search_timeout_secs: parse_env("SEARCH_TIMEOUT_SECS", 15)?,
            video_timeout_secs: parse_env("VIDEO_TIMEOUT_SECS", 10)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 15)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .ok()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Config pointing at unreachable endpoints; tests swap in fake collaborators.
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: "test-gemini".to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_api_url: "http://127.0.0.1:9/gemini".to_string(),
            serpapi_key: "test-serp".to_string(),
            serpapi_url: "http://127.0.0.1:9/search".to_string(),
            youtube_api_key: "test-youtube".to_string(),
            youtube_api_url: "http://127.0.0.1:9/youtube".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            session_ttl_minutes: 120,
            max_upload_bytes: 16 * 1024 * 1024,
            search_timeout_secs: 1,
            video_timeout_secs: 1,
            llm_timeout_secs: 1,
        }
    }
}
