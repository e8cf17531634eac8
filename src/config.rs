use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub header_path: PathBuf,
    pub readme_path: PathBuf,
    pub update_readme: bool,
    pub version_marker: String,
    pub fallback_version: String,
    pub git: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_path: PathBuf::from("include/version.h"),
            readme_path: PathBuf::from("README.md"),
            update_readme: true,
            version_marker: "**Version:** ".to_string(),
            fallback_version: "unknown".to_string(),
            git: "git".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).with_context(|| format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/fwstamp/fwstamp.yml
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join("fwstamp").join("fwstamp.yml");
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./fwstamp.yml
        let fallback_config = PathBuf::from("fwstamp.yml");
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
