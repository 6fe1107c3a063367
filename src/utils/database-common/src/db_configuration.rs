// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use crate::DatabaseProvider;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 3;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfiguration {
    pub provider: DatabaseProvider,
    pub user: String,
    pub database_name: String,
    pub host: String,
    pub port: Option<u16>,
    /// Namespace the source tables are looked up in
    pub schema: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfiguration {
    pub fn new(
        provider: DatabaseProvider,
        user: impl Into<String>,
        database_name: impl Into<String>,
        host: impl Into<String>,
        port: Option<u16>,
    ) -> Self {
        Self {
            provider,
            user: user.into(),
            database_name: database_name.into(),
            host: host.into(),
            port,
            schema: DEFAULT_SCHEMA.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    pub fn with_schema(self, schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            ..self
        }
    }

    pub fn with_pool_limits(self, max_connections: u32, acquire_timeout: Duration) -> Self {
        Self {
            max_connections,
            acquire_timeout,
            ..self
        }
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.provider.default_port())
    }

    /// Connection string without the password, safe to be logged
    pub fn display_connection_string(&self) -> String {
        format!(
            "{}://{}@{}:{}/{}",
            self.provider,
            self.user,
            self.host,
            self.port(),
            self.database_name
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
