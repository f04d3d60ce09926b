use crate::error::{Result, VidqlError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = ".vidql.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VidqlConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL IDE on `GET /graphql`
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Artificial delay applied to every store access, in milliseconds
    #[serde(default)]
    pub latency_ms: u64,

    /// How long `bar` waits before resolving, in milliseconds
    #[serde(default = "default_deferred_value_ms")]
    pub deferred_value_ms: u64,
}

fn default_deferred_value_ms() -> u64 {
    2000
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            deferred_value_ms: default_deferred_value_ms(),
        }
    }
}

impl DataSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn deferred_value_delay(&self) -> Duration {
        Duration::from_millis(self.deferred_value_ms)
    }
}

impl VidqlConfig {
    /// Load configuration from an explicit path, or from the nearest
    /// `.vidql.toml` above `start_path`. Falls back to defaults when no file
    /// is found.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(VidqlError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => Self::find_config_file(start_path),
        };

        match path {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: VidqlConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
