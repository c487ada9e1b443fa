// =============================================================================
// CONFIGURATION - Load settings from config.toml
// =============================================================================
//
// Instance names, which device to report on, output format and logging.
// Every section falls back to its defaults when missing.

use crate::backend::InstanceSettings;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub instance: InstanceConfig,
    pub report: ReportConfig,
    pub debug: DebugConfig,
}

/// What the Vulkan instance is created with
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    pub app_name: String,
    pub engine_name: String,
    pub extensions: Vec<String>,
    pub layers: Vec<String>,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            app_name: "Vulkan Info App".to_string(),
            engine_name: "No engine".to_string(),
            extensions: Vec::new(),
            layers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Report settings
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub device_index: usize,
    pub format: OutputFormat,
}

/// Debug settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub validation_layers: bool,
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            validation_layers: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults if not found
    pub fn load() -> Self {
        Self::load_from_path("config.toml").unwrap_or_else(|e| {
            log::warn!("Failed to load config.toml: {:#}. Using defaults.", e);
            Config::default()
        })
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        log::info!("Loaded configuration from {:?}", path);
        log::debug!("Config: {:?}", config);

        Ok(config)
    }

    pub fn instance_settings(&self) -> InstanceSettings {
        InstanceSettings {
            app_name: self.instance.app_name.clone(),
            engine_name: self.instance.engine_name.clone(),
            extensions: self.instance.extensions.clone(),
            layers: self.instance.layers.clone(),
        }
    }

    /// Log level as a filter; unknown names fall back to Info
    pub fn log_level(&self) -> log::LevelFilter {
        self.debug.log_level.parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level '{}', defaulting to info", self.debug.log_level);
            log::LevelFilter::Info
        })
    }
}
