//! Adapter configuration.
//!
//! Each adapter takes an explicit config record. Nothing reads the process
//! environment implicitly: call [`ChatConfig::from_env`] /
//! [`EmbeddingConfig::from_env`] at the call site when that is wanted.
//!
//! Configs also load from YAML; missing fields fall back to the defaults.
//!
//! ```rust
//! use ai_lib_lite::config::ChatConfig;
//!
//! let cfg = ChatConfig::from_yaml_str("model: gpt-4\ntemperature: 0.2\n").unwrap();
//! assert_eq!(cfg.model, "gpt-4");
//! assert_eq!(cfg.base_url, ai_lib_lite::config::DEFAULT_BASE_URL);
//! ```

use crate::{Error, ErrorContext, Result};
use serde::Deserialize;
use std::env;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = models::GPT_3_5_TURBO;
pub const DEFAULT_EMBEDDING_MODEL: &str = models::TEXT_EMBEDDING_ADA_002;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const POOL_MAX_IDLE_ENV: &str = "AI_HTTP_POOL_MAX_IDLE_PER_HOST";
pub const PROXY_URL_ENV: &str = "AI_PROXY_URL";

pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Known model identifiers. Any other string is accepted as well.
pub mod models {
    pub const GPT_3_5_TURBO: &str = "gpt-3.5-turbo";
    pub const GPT_3_5_TURBO_16K: &str = "gpt-3.5-turbo-16k";
    pub const GPT_4: &str = "gpt-4";
    pub const GPT_4_32K: &str = "gpt-4-32k";
    pub const TEXT_EMBEDDING_ADA_002: &str = "text-embedding-ada-002";
}

/// Connection settings for the HTTP client an adapter builds in `new`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Idle connections kept per host. Default: 32.
    pub pool_max_idle_per_host: usize,
    /// Route every request through this proxy. A URL reqwest cannot parse is
    /// rejected when the adapter is built.
    pub proxy_url: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            proxy_url: None,
        }
    }
}

impl HttpConfig {
    /// Defaults, overridden by `AI_HTTP_POOL_MAX_IDLE_PER_HOST` and `AI_PROXY_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pool_max_idle_per_host = lookup(POOL_MAX_IDLE_ENV)
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_POOL_MAX_IDLE_PER_HOST);
        let proxy_url = lookup(PROXY_URL_ENV).filter(|s| !s.trim().is_empty());
        Self {
            pool_max_idle_per_host,
            proxy_url,
        }
    }

    pub fn with_proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn with_pool_max_idle_per_host(mut self, max_idle: usize) -> Self {
        self.pool_max_idle_per_host = max_idle;
        self
    }
}

/// Chat adapter configuration.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Backend model identifier. Default: `gpt-3.5-turbo`.
    pub model: String,
    /// Sampling temperature, `>= 0`. Default: `0.0`.
    pub temperature: f32,
    /// Bearer credential. Default: empty.
    pub api_key: String,
    /// Endpoint root; `/chat/completions` is appended. Default: [`DEFAULT_BASE_URL`].
    pub base_url: String,
    pub http: HttpConfig,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_CHAT_MODEL.to_string(),
            temperature: 0.0,
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl ChatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with the API key, optional base URL and HTTP settings taken
    /// from the environment.
    pub fn from_env() -> Self {
        let (api_key, base_url) = credentials_from_env();
        Self {
            api_key,
            base_url,
            http: HttpConfig::from_env(),
            ..Self::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(Error::configuration_with_context(
                "temperature must be a finite value >= 0",
                ErrorContext::new()
                    .with_field_path("chat.temperature")
                    .with_details(format!("got {}", self.temperature)),
            ));
        }
        validate_common(&self.model, &self.base_url, "chat")
    }

    pub(crate) fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .finish()
    }
}

/// Embedding adapter configuration.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Backend model identifier. Default: `text-embedding-ada-002`.
    pub model: String,
    pub api_key: String,
    /// Endpoint root; `/embeddings` is appended.
    pub base_url: String,
    pub http: HttpConfig,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl EmbeddingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let (api_key, base_url) = credentials_from_env();
        Self {
            api_key,
            base_url,
            http: HttpConfig::from_env(),
            ..Self::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_common(&self.model, &self.base_url, "embeddings")
    }

    pub(crate) fn endpoint(&self) -> String {
        format!("{}/embeddings", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for EmbeddingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingConfig")
            .field("model", &self.model)
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .finish()
    }
}

fn credentials_from_env() -> (String, String) {
    let api_key = env::var(API_KEY_ENV).unwrap_or_default();
    let base_url = env::var(BASE_URL_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    (api_key, base_url)
}

fn validate_common(model: &str, base_url: &str, section: &str) -> Result<()> {
    if model.trim().is_empty() {
        return Err(Error::configuration_with_context(
            "model must not be empty",
            ErrorContext::new().with_field_path(format!("{}.model", section)),
        ));
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(Error::configuration_with_context(
            "base_url must be an http(s) URL",
            ErrorContext::new()
                .with_field_path(format!("{}.base_url", section))
                .with_details(base_url.to_string()),
        ));
    }
    Ok(())
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}
