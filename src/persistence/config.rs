use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Model used for insight requests unless configured otherwise
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variables consulted for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// User configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_notifications() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            notifications: default_notifications(),
        }
    }
}

impl AppConfig {
    /// Apply command-line overrides
    pub fn with_model_override(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        self
    }

    /// API key from the config file, falling back to the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key
            .clone()
            .into_iter()
            .chain(API_KEY_ENV_VARS.iter().filter_map(|name| lookup(*name)))
            .find(|key| !key.trim().is_empty())
    }
}

/// Load configuration from config.json; problems fall back to defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> AppConfig {
    let path = path.as_ref();

    if !path.exists() {
        return AppConfig::default();
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| serde_json::from_str::<AppConfig>(&content).map_err(anyhow::Error::from));

    match parsed {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
            AppConfig::default()
        }
    }
}

/// Save configuration to config.json
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
