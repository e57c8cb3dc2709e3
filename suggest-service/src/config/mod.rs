use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Together AI serves an OpenAI-compatible completion API at this base URL.
const DEFAULT_API_BASE_URL: &str = "https://api.together.xyz/v1";
const DEFAULT_MODEL: &str = "meta-llama/Llama-3.3-70B-Instruct-Turbo-Free";

/// Credential variables checked at startup, in preference order.
const API_KEY_VARS: [&str; 2] = ["TOGETHER_API_KEY", "OPENAI_API_KEY"];

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl SuggestConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(SuggestConfig {
            common,
            upstream: UpstreamConfig {
                api_key: api_key_from_env()?,
                base_url: env::var("SUGGEST_API_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
                model: env::var("SUGGEST_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            },
        })
    }
}

/// Resolve the upstream credential from the environment.
///
/// `TOGETHER_API_KEY` wins over `OPENAI_API_KEY`; empty values count as
/// unset. Startup is fatal when neither is present.
fn api_key_from_env() -> Result<String, AppError> {
    for var in API_KEY_VARS {
        if let Ok(val) = env::var(var) {
            if !val.is_empty() {
                return Ok(val);
            }
        }
    }

    Err(AppError::ConfigError(anyhow::anyhow!(
        "No API key found in environment: set {} or {}",
        API_KEY_VARS[0],
        API_KEY_VARS[1]
    )))
}

/// First four characters of the credential, for startup diagnostics.
pub fn key_preview(api_key: &str) -> String {
    api_key.chars().take(4).collect()
}
