use crate::page::Page;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub window: WindowConfig,
    pub ui: UiConfig,
}

/// Window configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    /// Initial window width (in pixels)
    pub width: f32,
    /// Initial window height (in pixels)
    pub height: f32,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UiConfig {
    /// Page shown at window open: "welcome" or "settings"
    pub start_page: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window: WindowConfig {
                title: "NanoLab Control Panel".to_string(),
                width: 1000.0,
                height: 700.0,
            },
            ui: UiConfig {
                start_page: "welcome".to_string(),
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        // Use directories crate to find config directory
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "nanolab") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            log::warn!("Failed to parse config file: {}; using defaults", e);
                        }
                    },
                    Err(e) => {
                        log::warn!("Failed to read config file: {}; using defaults", e);
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            // Create config directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                let config = Config::default();
                config.save()?;
            }
        }
        Ok(())
    }

    /// Resolve the configured start page, falling back to the welcome page
    /// when the value is unknown.
    pub fn start_page(&self) -> Page {
        match self.ui.start_page.as_str() {
            "welcome" => Page::Welcome,
            "settings" => Page::Settings,
            other => {
                log::warn!("Unknown start_page {:?}; using welcome", other);
                Page::Welcome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.title, "NanoLab Control Panel");
        assert_eq!(config.window.width, 1000.0);
        assert_eq!(config.window.height, 700.0);
        assert_eq!(config.ui.start_page, "welcome");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.ui.start_page, deserialized.ui.start_page);
        assert_eq!(config.window.title, deserialized.window.title);
    }

    #[test]
    fn test_start_page_resolution() {
        let mut config = Config::default();
        assert_eq!(config.start_page(), Page::Welcome);
        config.ui.start_page = "settings".to_string();
        assert_eq!(config.start_page(), Page::Settings);
        config.ui.start_page = "garbage".to_string();
        assert_eq!(config.start_page(), Page::Welcome);
    }
}
