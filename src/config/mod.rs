use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

use crate::core::{AppError, Result};
use crate::transport::BaseUrl;
use crate::widget::{DEFAULT_SOURCE, EndpointConfig, EndpointVariant, MIN_PROBE_TIMEOUT};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const ENV_PREFIX: &str = "CHATLINE";

pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join("Library/Application Support/chatline"))
    }

    #[cfg(target_os = "linux")]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
            .map(|c| c.join("chatline"))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .map(|a| a.join("chatline"))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join(".config/chatline"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub variant: EndpointVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub source: String,
    pub assistant_name: String,
    pub probe_interval_secs: u64,
    pub probe_timeout_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            variant: EndpointVariant::default(),
            path: None,
            source: DEFAULT_SOURCE.to_string(),
            assistant_name: "Assistant".to_string(),
            probe_interval_secs: 10,
            probe_timeout_ms: 2000,
            log_file: None,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Self::get_config_path().as_deref())
    }

    /// Layers the optional file under `CHATLINE_*` environment variables.
    /// Falls back to defaults when either source is unusable.
    #[must_use]
    pub fn load_from(path: Option<&Path>) -> Self {
        Self::try_load_from(path).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config: {e}");
            Self::default()
        })
    }

    pub fn try_load_from(path: Option<&Path>) -> std::result::Result<Self, config::ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        builder.build().and_then(Config::try_deserialize)
    }

    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        get_config_dir().map(|dir| dir.join("config.toml"))
    }

    pub fn init_default() -> Result<PathBuf> {
        let path = Self::get_config_path()
            .ok_or_else(|| AppError::Config("Could not determine config directory".to_string()))?;

        Self::write_template(&path)?;
        Ok(path)
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {}", path.display()),
            )
            .into());
        }

        fs::write(path, include_str!("config.template.toml"))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn base_url(&self) -> Result<BaseUrl> {
        BaseUrl::parse(self.base_url.clone()).map_err(AppError::from)
    }

    #[must_use]
    pub fn endpoint(&self) -> EndpointConfig {
        let endpoint = EndpointConfig::for_variant(self.variant, &self.source);
        match self.path.as_deref().filter(|p| !p.is_empty()) {
            Some(path) => endpoint.with_path(path),
            None => endpoint,
        }
    }

    #[must_use]
    pub fn probe_interval(&self) -> Duration {
        Duration::from_secs(self.probe_interval_secs.max(1))
    }

    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms).max(MIN_PROBE_TIMEOUT)
    }
}
