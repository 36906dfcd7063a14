// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{PackMetaError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const HOME_ENV_VAR: &str = "PACKMETA_HOME";
const ENV_PREFIX: &str = "PACKMETA";
const DEFAULT_HOME_DIR: &str = ".packmeta";
const DEFAULT_PACKAGES_FILE: &str = "packages.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackMetaConfig {
    #[serde(skip)]
    home: PathBuf,

    #[serde(default)]
    pub serializer: SerializerConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SerializerConfig {
    /// Write indented JSON
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Package file used when a command is given no path; relative to the home directory
    #[serde(default = "default_packages_file")]
    pub packages_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            packages_file: default_packages_file(),
        }
    }
}

fn default_packages_file() -> String {
    DEFAULT_PACKAGES_FILE.to_string()
}

fn config_error(error: config::ConfigError) -> PackMetaError {
    PackMetaError::ConfigError(error.to_string())
}

/// Load configuration from `$PACKMETA_HOME` (default `~/.packmeta`)
pub fn new_packmeta_config() -> Result<PackMetaConfig> {
    let home = match env::var_os(HOME_ENV_VAR) {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => dirs::home_dir()
            .ok_or_else(|| {
                PackMetaError::ConfigError("Unable to determine the home directory".to_string())
            })?
            .join(DEFAULT_HOME_DIR),
    };
    PackMetaConfig::new(home)
}

impl PackMetaConfig {
    /// Layer defaults, `<home>/config.toml`, then `PACKMETA_*` variables
    /// (`PACKMETA_SERIALIZER__PRETTY=true`).
    pub fn new(home: PathBuf) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE_NAME);
        log::debug!("Loading config from {config_path:?}");

        let settings = Config::builder()
            .set_default("serializer.pretty", false)
            .map_err(config_error)?
            .set_default("storage.packages_file", DEFAULT_PACKAGES_FILE)
            .map_err(config_error)?
            .add_source(File::from(config_path.as_path()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error)?;

        let mut config: PackMetaConfig = settings.try_deserialize().map_err(config_error)?;
        config.home = home;
        Ok(config)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.join(CONFIG_FILE_NAME)
    }

    /// Default package file; an absolute `packages_file` is used as is
    pub fn packages_path(&self) -> PathBuf {
        self.home.join(&self.storage.packages_file)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = self.config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| PackMetaError::ConfigError(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }
}
