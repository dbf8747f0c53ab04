use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BumperError, Result};

/// Represents the complete configuration for bumper.
///
/// Controls which files are bumped when a level flag is given without an
/// explicit file list, and how missing paths are treated.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default file list used when a bump flag has no FILES.
fn default_files() -> Vec<String> {
    vec!["setup.py".to_string()]
}

/// Configuration for file selection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_files")]
    pub default: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            default: default_files(),
        }
    }
}

/// Configuration for behavior customization.
///
/// `fail_on_missing` decides whether an explicitly listed path that does
/// not exist aborts the run or is silently skipped.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub fail_on_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            files: FilesConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumper.toml` in current directory
/// 3. `.bumper.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./bumper.toml").exists() {
        fs::read_to_string("./bumper.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".bumper.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str).map_err(|e| BumperError::config(e.to_string()))?;
    Ok(config)
}
