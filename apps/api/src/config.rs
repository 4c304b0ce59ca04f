use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::GenerationSettings;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Output cap inherited from the first deployment. Long analyses get cut off at
/// this length; raise `LLM_MAX_OUTPUT_TOKENS` to lift it.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 100;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub cors_origin: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_output_tokens: u32,
    pub llm_timeout: Duration,
    pub fetch_timeout: Duration,
    pub llm_base_url: String,
    pub drive_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            port: parse_env("PORT", 3000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_temperature: parse_env("LLM_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            llm_max_output_tokens: parse_env("LLM_MAX_OUTPUT_TOKENS", DEFAULT_MAX_OUTPUT_TOKENS)?,
            llm_timeout: Duration::from_secs(parse_env("LLM_TIMEOUT_SECS", 60u64)?),
            fetch_timeout: Duration::from_secs(parse_env("FETCH_TIMEOUT_SECS", 30u64)?),
            llm_base_url: std::env::var("LLM_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            drive_base_url: std::env::var("DRIVE_BASE_URL")
                .unwrap_or_else(|_| "https://drive.google.com".to_string()),
        })
    }

    /// Fixed generation parameters shared by every completion call.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.llm_model.clone(),
            temperature: self.llm_temperature,
            max_output_tokens: self.llm_max_output_tokens,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
