use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Env files read at startup, in order. Real env vars take precedence over both.
const ENV_FILES: [&str; 2] = [".env", ".env.local"];

pub const FEED_KEY_VAR: &str = "DATAGOLF_API_KEY";
pub const DATABASE_URL_VAR: &str = "SUPABASE_URL";
pub const DATABASE_URL_FALLBACK_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";
pub const DATABASE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    #[serde(default = "default_feed_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_feed_base_url() -> String {
    "https://feeds.datagolf.com".to_string()
}

fn default_timeout_ms() -> u64 { 10_000 }

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_feed_base_url(),
            request_timeout_ms: default_timeout_ms(),
        }
    }
}

impl FeedConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_table() -> String {
    "golfer_scores".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            request_timeout_ms: default_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SyncConfig {
    /// Exit non-zero when any player update failed, even though the run completed.
    #[serde(default)]
    pub fail_on_update_errors: bool,
}

/// Secrets needed for one run. Built once in `main` and handed to the clients.
#[derive(Clone)]
pub struct Credentials {
    pub feed_api_key: String,
    pub database_url: String,
    pub database_service_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("database_url", &self.database_url)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Like `load`, but a missing file means built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config TOML")
    }

    /// Load .env files into process environment. Real env vars take precedence.
    pub fn load_env_files() {
        for file in ENV_FILES {
            if let Ok(content) = std::fs::read_to_string(file) {
                apply_env_file(&content);
            }
        }
    }

    /// Resolve every required credential, failing on the first one missing.
    pub fn credentials() -> Result<Credentials> {
        let feed_api_key = required_var(FEED_KEY_VAR)?;
        let database_url = required_var(DATABASE_URL_VAR)
            .or_else(|_| required_var(DATABASE_URL_FALLBACK_VAR))
            .with_context(|| {
                format!("database endpoint not set ({} or {})", DATABASE_URL_VAR, DATABASE_URL_FALLBACK_VAR)
            })?;
        let database_service_key = required_var(DATABASE_KEY_VAR)?;
        Ok(Credentials {
            feed_api_key,
            database_url,
            database_service_key,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) => {
            let value = sanitize_key(&value);
            if value.is_empty() {
                anyhow::bail!("{} is set but empty", name);
            }
            Ok(value)
        }
        Err(_) => anyhow::bail!("{} is not set", name),
    }
}

fn apply_env_file(content: &str) {
    // Strip BOM if present (common on Windows-created files)
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    for (key, value) in parse_env_lines(content) {
        if std::env::var(&key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

fn parse_env_lines(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(|line| line.trim().trim_matches('\r'))
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.to_string(), value.to_string())
        })
        .collect()
}

/// Strip carriage returns, BOM, and other invisible chars from a key value.
fn sanitize_key(raw: &str) -> String {
    raw.replace(['\r', '\u{feff}', '\u{200b}'], "")
        .trim()
        .to_string()
}
