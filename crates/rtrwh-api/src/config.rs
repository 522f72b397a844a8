use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use anyhow::Context;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "RTRWH_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "rtrwh.toml";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Environment {
    pub env_type: String,
}

impl Default for Environment {
    fn default() -> Self {
        Self { env_type: "default".to_string() }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 3000 }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_body_size_kb: usize,
    /// Stored submissions before new ones are refused
    pub max_submissions: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_body_size_kb: default_max_body_size_kb(), max_submissions: default_max_submissions() }
    }
}

/// Optional external reference tables; the built-in tables are used for any
/// path left unset
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DataConfig {
    pub cities_path: Option<PathBuf>,
    pub coefficients_path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RtrwhConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl RtrwhConfig {
    /// Load from `RTRWH_CONFIG_PATH` (default `rtrwh.toml`), then apply
    /// environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Ok(Self::load_from(Path::new(&path))?.apply_env_overrides())
    }

    /// Load from a file. A missing file yields the defaults; an unreadable or
    /// malformed one is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let mut config = Self::from_toml_str(&contents)
                    .with_context(|| format!("Failed to parse configuration file '{}'", path.display()))?;
                config.source = Some(path.to_path_buf());
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read configuration file '{}'", path.display())),
        }
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        info!(
            "Applying configuration profile for '{}' environment.",
            self.environment.env_type
        );

        if let Some(host) = lookup("RTRWH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RTRWH_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(format) = lookup("RTRWH_LOG_FORMAT") {
            match format.to_ascii_lowercase().as_str() {
                "json" => self.logging.format = LogFormat::Json,
                "pretty" => self.logging.format = LogFormat::Pretty,
                _ => {}
            }
        }
        if let Some(path) = lookup("RTRWH_CITIES_PATH") {
            self.data.cities_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("RTRWH_COEFFICIENTS_PATH") {
            self.data.coefficients_path = Some(PathBuf::from(path));
        }
        if let Some(max) = lookup("RTRWH_MAX_SUBMISSIONS").and_then(|m| m.parse::<usize>().ok()) {
            self.limits.max_submissions = max;
        }

        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn max_body_size_bytes(&self) -> usize {
        self.limits.max_body_size_kb * 1024
    }
}

fn default_max_body_size_kb() -> usize {
    64
}
fn default_max_submissions() -> usize {
    10_000
}
