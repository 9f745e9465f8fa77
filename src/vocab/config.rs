use crate::error::{Result, VocabError};
use crate::transport::http::DEFAULT_BASE_PATH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Keys accepted by `vocab config`, in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "server-url",
    "base-path",
    "mock",
    "mock-delay-ms",
    "timeout-secs",
    "stale-after-secs",
];

/// Configuration for vocab, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct VocabConfig {
    /// Backend origin, e.g. "http://localhost:8000"
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Prefix joined between the origin and resource paths
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Serve the built-in sample notebooks instead of calling the backend
    #[serde(default)]
    pub mock: bool,

    /// Simulated latency for mock responses
    #[serde(default)]
    pub mock_delay_ms: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long a successful query result is reused (0 = always refetch)
    #[serde(default)]
    pub stale_after_secs: u64,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            base_path: default_base_path(),
            mock: false,
            mock_delay_ms: 0,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            stale_after_secs: 0,
        }
    }
}

impl VocabConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            VocabError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "server-url" => self.server_url.clone(),
            "base-path" => self.base_path.clone(),
            "mock" => self.mock.to_string(),
            "mock-delay-ms" => self.mock_delay_ms.to_string(),
            "timeout-secs" => self.timeout_secs.to_string(),
            "stale-after-secs" => self.stale_after_secs.to_string(),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Set a key from its string form. Values are checked before anything changes.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server-url" => {
                let url = reqwest::Url::parse(value)
                    .map_err(|e| VocabError::Config(format!("invalid server-url {:?}: {}", value, e)))?;
                if url.cannot_be_a_base() {
                    return Err(VocabError::Config(format!(
                        "invalid server-url {:?}: not an http(s) origin",
                        value
                    )));
                }
                self.server_url = value.to_string();
            }
            "base-path" => {
                self.base_path = if value.starts_with('/') || value.is_empty() {
                    value.to_string()
                } else {
                    format!("/{}", value)
                };
            }
            "mock" => self.mock = parse_value(key, value)?,
            "mock-delay-ms" => self.mock_delay_ms = parse_value(key, value)?,
            "timeout-secs" => self.timeout_secs = parse_value(key, value)?,
            "stale-after-secs" => self.stale_after_secs = parse_value(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All keys with their current values.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }

    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }
}

fn parse_value<V: std::str::FromStr>(key: &str, value: &str) -> Result<V>
where
    V::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| VocabError::Config(format!("invalid {} {:?}: {}", key, value, e)))
}

fn unknown_key(key: &str) -> VocabError {
    VocabError::Config(format!(
        "unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = VocabConfig::default();
        assert_eq!(config.server_url, "http://localhost:8000");
        assert_eq!(config.base_path, "/api");
        assert!(!config.mock);
        assert_eq!(config.stale_after(), Duration::ZERO);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = VocabConfig::load(dir.path()).unwrap();
        assert_eq!(config, VocabConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = VocabConfig::default();
        config.set("server-url", "https://vocab.example.com").unwrap();
        config.set("mock", "true").unwrap();
        config.save(&nested).unwrap();

        let loaded = VocabConfig::load(&nested).unwrap();
        assert_eq!(loaded.server_url, "https://vocab.example.com");
        assert!(loaded.mock);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"server-url": "http://10.0.0.2:9000"}"#,
        )
        .unwrap();

        let config = VocabConfig::load(dir.path()).unwrap();
        assert_eq!(config.server_url, "http://10.0.0.2:9000");
        assert_eq!(config.base_path, "/api");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(matches!(
            VocabConfig::load(dir.path()),
            Err(VocabError::Config(_))
        ));
    }

    #[test]
    fn test_set_normalizes_base_path() {
        let mut config = VocabConfig::default();
        config.set("base-path", "v2").unwrap();
        assert_eq!(config.base_path, "/v2");
        config.set("base-path", "").unwrap();
        assert_eq!(config.get("base-path").unwrap(), "");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = VocabConfig::default();
        assert!(config.set("mock", "maybe").is_err());
        assert!(config.set("timeout-secs", "-1").is_err());
        assert!(config.set("server-url", "localhost").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, VocabConfig::default());
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let config = VocabConfig::default();
        let all = config.list_all();
        let keys: Vec<&str> = all.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, CONFIG_KEYS);
        assert!(all.contains(&("mock-delay-ms", "0".to_string())));
    }
}
