//! Application configuration loaded from the environment.

use std::path::PathBuf;

use anyhow::{bail, Context};
use lorecrafter_domain::FallbackPolicy;

use crate::infrastructure::chat_completions::{
    DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, DEFAULT_LLM_TIMEOUT_SECS,
};

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    pub max_attempts: u32,
    pub fallback_policy: FallbackPolicy,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub enabled: bool,
    pub dir: PathBuf,
    pub ttl_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub narrative: NarrativeConfig,
    pub asset_dir: PathBuf,
    pub cache: CacheConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = var("LLM_API_KEY")
            .or_else(|| var("GROQ_API_KEY"))
            .context("LLM_API_KEY (or GROQ_API_KEY) must be set")?;

        let max_attempts: u32 = parse_or(var("NARRATIVE_MAX_ATTEMPTS"), 3, "NARRATIVE_MAX_ATTEMPTS")?;
        if max_attempts == 0 {
            bail!("NARRATIVE_MAX_ATTEMPTS must be at least 1");
        }

        let fallback_policy = match var("NARRATIVE_FALLBACK_POLICY") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid NARRATIVE_FALLBACK_POLICY: {}", raw))?,
            None => FallbackPolicy::default(),
        };

        Ok(Self {
            llm: LlmConfig {
                api_key,
                base_url: var("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_LLM_BASE_URL.into()),
                model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.into()),
                timeout_secs: parse_or(
                    var("LLM_TIMEOUT_SECS"),
                    DEFAULT_LLM_TIMEOUT_SECS,
                    "LLM_TIMEOUT_SECS",
                )?,
            },
            narrative: NarrativeConfig {
                max_attempts,
                fallback_policy,
            },
            asset_dir: var("ASSET_DIR")
                .unwrap_or_else(|| "client_assets".into())
                .into(),
            cache: CacheConfig {
                enabled: parse_or(var("CACHE_ENABLED"), false, "CACHE_ENABLED")?,
                dir: var("CACHE_DIR").unwrap_or_else(|| "cache".into()).into(),
                ttl_secs: parse_or(var("CACHE_TTL_SECS"), 24 * 60 * 60, "CACHE_TTL_SECS")?,
            },
            server: ServerConfig {
                host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
                port: parse_or(
                    var("SERVER_PORT").or_else(|| var("PORT")),
                    8000,
                    "SERVER_PORT",
                )?,
            },
        })
    }
}

fn parse_or<T>(raw: Option<String>, default: T, name: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid {}: {}", name, raw)),
        None => Ok(default),
    }
}
