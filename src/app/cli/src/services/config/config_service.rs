// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use internal_error::ResultIntoInternal;
use merge::Merge;

use crate::config::models::*;
use crate::error::CLIError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const CONFIG_FILENAME: &str = ".hotel-reports.yaml";
pub const CONFIG_PATH_ENV_VAR: &str = "HOTEL_REPORTS_CONFIG";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ConfigService {
    explicit_path: Option<PathBuf>,
    work_dir: PathBuf,
}

impl ConfigService {
    /// `explicit_path` comes from `--config` or the environment, otherwise the
    /// config is looked up in the working directory
    pub fn new(explicit_path: Option<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            explicit_path,
            work_dir: work_dir.into(),
        }
    }

    pub fn config_path(&self) -> Result<Option<PathBuf>, CLIError> {
        if let Some(path) = &self.explicit_path {
            if !path.is_file() {
                return Err(CLIError::usage_error(format!(
                    "Config file {} does not exist",
                    path.display()
                )));
            }
            return Ok(Some(path.clone()));
        }

        let path = self.work_dir.join(CONFIG_FILENAME);
        Ok(path.is_file().then_some(path))
    }

    /// Loads the config and fills the unset values with defaults
    pub fn load(&self) -> Result<CLIConfig, CLIError> {
        let mut config = match self.config_path()? {
            Some(path) => Self::load_from(&path)?,
            None => CLIConfig::new(),
        };

        config.merge(CLIConfig::sample());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<CLIConfig, CLIError> {
        tracing::debug!(path = %path.display(), "Loading config");

        let content = std::fs::read_to_string(path)
            .context_int_err(format!("Failed to read config {}", path.display()))?;

        Self::parse(&content).map_err(|e| {
            CLIError::usage_error(format!("Invalid config {}: {e}", path.display()))
        })
    }

    pub fn parse(content: &str) -> Result<CLIConfig, serde_yaml::Error> {
        // An empty file is a valid config
        if content.trim().is_empty() {
            return Ok(CLIConfig::new());
        }
        serde_yaml::from_str(content)
    }
}
