use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::http::locator::{DEFAULT_INDEX, ResourceLocator};

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "GATEHOUSE_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub document_root: PathBuf,
    /// Scheme and authority prefixed to `Location` on redirects
    pub base_url: String,
    pub index_file: String,
    /// Upper bound on bytes read for one request
    pub max_request_bytes: usize,
    /// Seconds a client gets to deliver its request
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            document_root: PathBuf::from("www"),
            base_url: "http://127.0.0.1:8080".to_string(),
            index_file: DEFAULT_INDEX.to_string(),
            max_request_bytes: 4096,
            read_timeout_secs: 30,
        }
    }
}

/// The read-only part of the configuration every request sees.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub locator: ResourceLocator,
    pub base_url: Url,
    pub max_request_bytes: usize,
    pub read_timeout: Duration,
}

impl SiteConfig {
    /// Absolute URL for a slash-led path, e.g. `http://host:8080/sub/`.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

impl Config {
    /// Defaults, then the YAML file from `GATEHOUSE_CONFIG` if set, then
    /// `LISTEN`, `DOCUMENT_ROOT` and `BASE_URL` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOCUMENT_ROOT") {
            cfg.document_root = PathBuf::from(root);
        }
        if let Ok(base) = std::env::var("BASE_URL") {
            cfg.base_url = base;
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw)?;
        Ok(cfg)
    }

    /// Validates the request-facing settings.
    pub fn site(&self) -> anyhow::Result<SiteConfig> {
        let base_url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url {:?}", self.base_url))?;

        if self.index_file.is_empty() || self.index_file.contains('/') {
            anyhow::bail!("index_file must be a plain file name, got {:?}", self.index_file);
        }
        if self.max_request_bytes == 0 {
            anyhow::bail!("max_request_bytes must be positive");
        }
        if self.read_timeout_secs == 0 {
            anyhow::bail!("read_timeout_secs must be positive");
        }

        Ok(SiteConfig {
            locator: ResourceLocator::new(&self.document_root, &self.index_file),
            base_url,
            max_request_bytes: self.max_request_bytes,
            read_timeout: Duration::from_secs(self.read_timeout_secs),
        })
    }
}
