use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/plank/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("plank/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("plank\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// Resolve the data file path. The `PLANK_DATA_PATH` environment
    /// variable wins over the config file, which wins over the platform
    /// data directory.
    pub fn data_file(&self) -> Option<PathBuf> {
        if let Ok(path) = std::env::var("PLANK_DATA_PATH") {
            return Some(PathBuf::from(path));
        }
        if let Some(path) = &self.data_path {
            return Some(path.clone());
        }
        dirs::data_dir().map(|data| data.join("plank/plank.json"))
    }
}
