use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH_ENV: &str = "LTS_CONFIG";
pub const HOST_ENV: &str = "LTS_HOST";
pub const PORT_ENV: &str = "LTS_PORT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LtsConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl LtsConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid config TOML")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// File named by `LTS_CONFIG` if set, then `LTS_HOST` / `LTS_PORT`.
    pub fn load() -> anyhow::Result<Self> {
        let base = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        base.with_overrides(std::env::var(HOST_ENV).ok(), std::env::var(PORT_ENV).ok())
    }

    pub fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = port {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("{} must be a port number, got {:?}", PORT_ENV, port))?;
        }
        Ok(self)
    }
}
