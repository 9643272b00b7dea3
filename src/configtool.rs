//  ____  ____     __        __       ____
// |  _ \|  _ \ __ \ \      / /__    / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/   \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use std::{env, ffi::OsString, fs, path::{Path, PathBuf}};

use dirs::config_dir;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::passgen::{CharacterClass, GenerationRequest, PassgenError};

/// Overrides the location of the configuration file.
pub const CONFIG_ENV: &str = "RPAWOGEN_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config directory error: {0}")]
    ConfigDirError(String),
}

/// 生成默认参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub special: bool,
    /// Seconds before a copied password is cleared from the clipboard.
    pub clipboard_timeout: u64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            lowercase: true,
            digits: true,
            special: true,
            clipboard_timeout: 10,
        }
    }
}

impl GenConfig {
    /// Reads the config at `path`. A missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config_data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&config_data)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = fs::File::create(path)?;
        serde_json::to_writer_pretty(config_file, &self)?;
        Ok(())
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_path()?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&get_config_path()?)
    }

    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        let switches = [self.uppercase, self.lowercase, self.digits, self.special];
        CharacterClass::ALL
            .into_iter()
            .zip(switches)
            .filter_map(|(class, on)| on.then_some(class))
            .collect()
    }

    pub fn to_request(&self) -> Result<GenerationRequest, PassgenError> {
        self.to_request_with(None, false, false, false, false)
    }

    /// Applies command-line overrides: `length` replaces the configured
    /// length, the `no_*` switches can only turn classes off.
    pub fn to_request_with(
        &self,
        length: Option<usize>,
        no_uppercase: bool,
        no_lowercase: bool,
        no_digits: bool,
        no_special: bool,
    ) -> Result<GenerationRequest, PassgenError> {
        GenerationRequest::from_flags(
            length.unwrap_or(self.length),
            self.uppercase && !no_uppercase,
            self.lowercase && !no_lowercase,
            self.digits && !no_digits,
            self.special && !no_special,
        )
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

/// 配置文件路径，环境变量优先
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    config_path_from(env::var_os(CONFIG_ENV))
}

/// Resolves the config path from the value of `RPAWOGEN_CONFIG`. Unset or
/// empty falls back to `config.json` in the config directory.
pub fn config_path_from(env_value: Option<OsString>) -> Result<PathBuf, ConfigError> {
    match env_value {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(get_config_dir()?.join("config.json")),
    }
}
