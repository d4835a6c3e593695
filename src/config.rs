use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// Threshold for ordinary days, in "HH:MM" form
    pub full_day_target: String,
    /// Threshold for the designated short day, in "HH:MM" form
    pub short_day_target: String,
    /// Short day label ("Mon".."Sun"); None means every day uses the full target
    pub short_day: Option<String>,
    /// Default records file used when --file is not given
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            full_day_target: "08:00".to_string(),
            short_day_target: "04:00".to_string(),
            short_day: Some("Sun".to_string()),
            data_file: None,
        }
    }
}

impl Config {
    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "yourname", "worktime")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        if !config_path.exists() {
            return Err(anyhow!("Config file does not exist"));
        }

        let config_data = fs::read_to_string(&config_path)
            .map_err(|e| anyhow!("Failed to read config file: {}", e))?;

        let config: Config = serde_json::from_str(&config_data)
            .map_err(|e| anyhow!("Failed to parse config: {}", e))?;

        Ok(config)
    }

    /// Loads the config file, falling back to defaults when none exists yet.
    /// A present but unreadable file is still an error.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::get_config_path()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load()
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow!("Failed to create config directory: {}", e))?;
        }

        let config_data = serde_json::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        fs::write(&config_path, config_data)
            .map_err(|e| anyhow!("Failed to write config file: {}", e))?;

        Ok(())
    }
}
