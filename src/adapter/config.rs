//! Configuration
//!
//! `inco.yaml` の読み込みと環境変数からの補完

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::time::Duration;

use crate::adapter::repositories::process_test_runner::{
    DEFAULT_TEST_CLASSPATH, DEFAULT_TEST_COMMAND,
};
use crate::domain::entities::iflow::Iflow;

pub const DEFAULT_CONFIG_PATH: &str = "inco.yaml";

// Environment variables to access the integration platform
pub const ENV_CLIENT_ID: &str = "CPI_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "CPI_CLIENT_SECRET";
pub const ENV_TOKEN_URL: &str = "CPI_TOKEN_URL";
pub const ENV_API_URL: &str = "CPI_API_URL";

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(rename = "tenantURL", default)]
    pub tenant_url: String,
    #[serde(rename = "tokenURL", default)]
    pub token_url: String,
    #[serde(rename = "apiURL", default)]
    pub api_url: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    // Test runner
    #[serde(default = "default_test_command")]
    pub test_command: String,
    #[serde(default = "default_test_classpath")]
    pub test_classpath: String,
    #[serde(default)]
    pub test_paths: Vec<String>,

    #[serde(default)]
    pub upload_scripts: Vec<Iflow>,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_test_command() -> String {
    DEFAULT_TEST_COMMAND.to_string()
}

fn default_test_classpath() -> String {
    DEFAULT_TEST_CLASSPATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tenant_url: String::new(),
            token_url: String::new(),
            api_url: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            test_command: default_test_command(),
            test_classpath: default_test_classpath(),
            test_paths: Vec::new(),
            upload_scripts: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded_path = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded_path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", expanded_path))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", expanded_path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Fills empty URLs from `CPI_TOKEN_URL` / `CPI_API_URL`
    pub fn with_env_fallbacks(self) -> Self {
        self.with_fallbacks(|key| std::env::var(key).ok())
    }

    pub fn with_fallbacks(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.token_url.is_empty() {
            self.token_url = lookup(ENV_TOKEN_URL).unwrap_or_default();
        }
        if self.api_url.is_empty() {
            self.api_url = lookup(ENV_API_URL).unwrap_or_default();
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// クライアント資格情報（環境変数からのみ取得）
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

// The secret must never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{} environment variable is not set", key))
        };
        Ok(Self {
            client_id: required(ENV_CLIENT_ID)?,
            client_secret: required(ENV_CLIENT_SECRET)?,
        })
    }
}
