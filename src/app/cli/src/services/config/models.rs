// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use database_common::{
    DEFAULT_ACQUIRE_TIMEOUT,
    DEFAULT_MAX_CONNECTIONS,
    DEFAULT_PASSWORD_ENV_VAR,
    DEFAULT_SCHEMA,
    DatabaseConfiguration,
    DatabaseProvider,
};
use duration_string::DurationString;
use hotel_reports::DEFAULT_PREVIEW_LIMIT;
use merge::Merge;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Merge, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CLIConfig {
    /// Source database connection
    #[merge(strategy = merge_recursive)]
    pub database: Option<DatabaseConfig>,

    /// Embedded query engine tuning
    #[merge(strategy = merge_recursive)]
    pub engine: Option<EngineConfig>,

    /// Source relation previews
    #[merge(strategy = merge_recursive)]
    pub preview: Option<PreviewConfig>,
}

impl CLIConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with all values set to their defaults
    pub fn sample() -> Self {
        Self {
            database: Some(DatabaseConfig::sample()),
            engine: Some(EngineConfig::sample()),
            preview: Some(PreviewConfig::sample()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Merge, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DatabaseConfig {
    pub provider: Option<DatabaseProvider>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_name: Option<String>,
    pub user: Option<String>,
    /// Name of the environment variable holding the password
    pub password_env_var: Option<String>,
    /// Schema the source tables are looked up in
    pub schema: Option<String>,
    pub max_connections: Option<u32>,
    /// Timeout for acquiring a connection from the pool (e.g. `30s`)
    pub acquire_timeout: Option<DurationString>,
}

impl DatabaseConfig {
    pub fn sample() -> Self {
        Self {
            provider: Some(DatabaseProvider::Postgres),
            host: Some("localhost".to_string()),
            port: Some(DatabaseProvider::Postgres.default_port()),
            database_name: Some("database-design-and-support-lab".to_string()),
            user: Some("postgres".to_string()),
            password_env_var: Some(DEFAULT_PASSWORD_ENV_VAR.to_string()),
            schema: Some(DEFAULT_SCHEMA.to_string()),
            max_connections: Some(DEFAULT_MAX_CONNECTIONS),
            acquire_timeout: Some(DurationString::new(DEFAULT_ACQUIRE_TIMEOUT)),
        }
    }

    /// Fills the unset values with defaults
    pub fn to_db_configuration(&self) -> DatabaseConfiguration {
        let mut cfg = self.clone();
        cfg.merge(Self::sample());

        let acquire_timeout: Duration = cfg
            .acquire_timeout
            .map_or(DEFAULT_ACQUIRE_TIMEOUT, Into::into);

        DatabaseConfiguration::new(
            cfg.provider.unwrap_or(DatabaseProvider::Postgres),
            cfg.user.unwrap_or_default(),
            cfg.database_name.unwrap_or_default(),
            cfg.host.unwrap_or_default(),
            cfg.port,
        )
        .with_schema(cfg.schema.unwrap_or_default())
        .with_pool_limits(
            cfg.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
            acquire_timeout,
        )
    }

    pub fn password_env_var(&self) -> &str {
        self.password_env_var
            .as_deref()
            .unwrap_or(DEFAULT_PASSWORD_ENV_VAR)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Merge, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Number of partitions the engine splits the work into, defaults to the
    /// number of CPU cores
    pub target_partitions: Option<usize>,
    /// Number of rows in one record batch
    pub batch_size: Option<usize>,
}

impl EngineConfig {
    pub fn sample() -> Self {
        Self {
            target_partitions: None,
            batch_size: None,
        }
    }

    pub fn to_engine_config(&self) -> hotel_reports_datafusion::EngineConfig {
        hotel_reports_datafusion::EngineConfig {
            target_partitions: self.target_partitions,
            batch_size: self.batch_size,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Merge, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PreviewConfig {
    /// Number of rows shown for each source relation
    pub limit: Option<usize>,
}

impl PreviewConfig {
    pub fn sample() -> Self {
        Self {
            limit: Some(DEFAULT_PREVIEW_LIMIT),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn merge_recursive<T: Merge>(left: &mut Option<T>, right: Option<T>) {
    if let Some(right) = right {
        match left {
            Some(left) => left.merge(right),
            None => *left = Some(right),
        }
    }
}
