//! Configuration management

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use usbwatch_core::InterfaceFilter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default log level when RUST_LOG and --log-level are absent
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub allowlist: AllowListSettings,
    #[serde(default)]
    pub enumerate: EnumerateSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowListSettings {
    /// Endpoint returning one authorized serial per line
    pub endpoint: String,
    /// Network fetch timeout in seconds
    #[serde(default = "AllowListSettings::default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumerateSettings {
    /// Mass-storage classification policy: "class" (match the interface
    /// class byte) or "exact" (match the full class/subclass/protocol triple)
    #[serde(default)]
    pub interface_filter: InterfaceFilter,
    /// Timeout for each external enumeration command, in seconds
    #[serde(default = "EnumerateSettings::default_timeout_secs")]
    pub command_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            allowlist: AllowListSettings::default(),
            enumerate: EnumerateSettings::default(),
        }
    }
}

impl Default for AllowListSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://10.10.20.1/serial.php".to_string(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl Default for EnumerateSettings {
    fn default() -> Self {
        Self {
            interface_filter: InterfaceFilter::default(),
            command_timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl Config {
    fn default_log_level() -> String {
        "info".to_string()
    }

    /// Load configuration from the specified path
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p
        } else {
            let candidates = vec![Self::default_path(), PathBuf::from("/etc/usbwatch/config.toml")];

            candidates
                .into_iter()
                .find(|p| p.exists())
                .ok_or_else(|| anyhow!("No configuration file found, using defaults"))?
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        config.validate()?;

        tracing::info!("Loaded configuration from: {}", config_path.display());
        Ok(config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default() -> Self {
        match Self::load(None) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Failed to load config: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save configuration to the specified path
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!("Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("usbwatch").join("config.toml")
        } else {
            PathBuf::from(".config/usbwatch/config.toml")
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(anyhow!(
                "Invalid log level '{}', must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        let endpoint = &self.allowlist.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(anyhow!(
                "Invalid allow-list endpoint '{}', must be an http(s) URL",
                endpoint
            ));
        }

        if self.allowlist.timeout_secs == 0 {
            return Err(anyhow!("allowlist.timeout_secs must be greater than 0"));
        }
        if self.enumerate.command_timeout_secs == 0 {
            return Err(anyhow!("enumerate.command_timeout_secs must be greater than 0"));
        }

        Ok(())
    }
}

impl AllowListSettings {
    fn default_timeout_secs() -> u64 {
        10
    }
}

impl EnumerateSettings {
    fn default_timeout_secs() -> u64 {
        10
    }
}
