use std::collections::HashMap;

use anyhow::{bail, Result};

/// Process configuration, read from the environment with `.env` fallback.
/// The Generation Service credential is the only required value; its
/// absence is fatal at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub bind: String,
    pub port: u16,
    pub fast_model: String,
    pub quality_model: String,
    pub genai_base_url: String,
    /// Timeout for a single Generation Service request, in seconds.
    pub request_timeout_s: u64,
    /// JSON body limit in megabytes. Files arrive base64-inline, so this
    /// must be generous.
    pub max_body_mb: usize,
}

fn parse_dotenv() -> HashMap<String, String> {
    let mut map = HashMap::new();
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return map;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            map.insert(k.trim().to_string(), v.trim().to_string());
        }
    }
    map
}

fn get(key: &str, dotenv: &HashMap<String, String>) -> Option<String> {
    std::env::var(key).ok().or_else(|| dotenv.get(key).cloned())
}

fn get_str(key: &str, dotenv: &HashMap<String, String>, default: &str) -> String {
    get(key, dotenv).unwrap_or_else(|| default.to_string())
}

fn get_u16(key: &str, dotenv: &HashMap<String, String>, default: u16) -> u16 {
    get(key, dotenv)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn get_u64(key: &str, dotenv: &HashMap<String, String>, default: u64) -> u64 {
    get(key, dotenv)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn get_usize(key: &str, dotenv: &HashMap<String, String>, default: usize) -> usize {
    get(key, dotenv)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let dotenv = parse_dotenv();

        let api_key = get_str("GENAI_API_KEY", &dotenv, "");
        if api_key.is_empty() {
            bail!("GENAI_API_KEY is not set (env or .env)");
        }

        Ok(Config {
            api_key,
            bind: get_str("WEB_BIND", &dotenv, "127.0.0.1"),
            port: get_u16("PORT", &dotenv, 4000),
            fast_model: get_str("MODEL_FAST", &dotenv, "gemini-2.0-flash"),
            quality_model: get_str("MODEL_QUALITY", &dotenv, "gemini-2.5-pro"),
            genai_base_url: get_str(
                "GENAI_BASE_URL",
                &dotenv,
                "https://generativelanguage.googleapis.com/v1beta",
            ),
            request_timeout_s: get_u64("REQUEST_TIMEOUT_S", &dotenv, 300),
            max_body_mb: get_usize("MAX_BODY_MB", &dotenv, 50),
        })
    }
}
