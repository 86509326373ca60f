use groupmodel_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LABEL_SEPARATOR: char = ';';
pub const DEFAULT_VIEW_NAME_LABEL: &str = "ViewName";

/// Environment variable pointing at an engine config file
pub const CONFIG_ENV_VAR: &str = "GROUPMODEL_CONFIG";

/// Resolve the engine config path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. GROUPMODEL_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("groupmodel").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no XDG config directory found".to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

fn default_label_separator() -> char {
    DEFAULT_LABEL_SEPARATOR
}

fn default_view_name_label() -> String {
    DEFAULT_VIEW_NAME_LABEL.to_string()
}

/// Tunables read by the controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Separator between label and value in static text labels
    #[serde(default = "default_label_separator")]
    pub label_separator: char,

    /// Field label the unknown-control diagnostic uses for the view name
    #[serde(default = "default_view_name_label")]
    pub view_name_label: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            label_separator: default_label_separator(),
            view_name_label: default_view_name_label(),
        }
    }
}

impl EngineConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| Error::Config(err.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|err| Error::Config(err.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| Error::Config(err.to_string()))
    }
}
