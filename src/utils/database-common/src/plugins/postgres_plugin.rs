// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct PostgresPlugin {}

impl PostgresPlugin {
    pub fn connect_options(
        db_configuration: &DatabaseConfiguration,
        db_password: Option<&SecretString>,
    ) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&db_configuration.host)
            .port(db_configuration.port())
            .username(&db_configuration.user)
            .database(&db_configuration.database_name);

        match db_password {
            Some(password) => options.password(password.expose_secret()),
            None => options,
        }
    }

    pub fn pool_options(db_configuration: &DatabaseConfiguration) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(db_configuration.max_connections)
            .acquire_timeout(db_configuration.acquire_timeout)
    }

    /// Resolves the password and opens the pool eagerly so that credential and
    /// network problems surface before any data is read
    #[tracing::instrument(level = "info", skip_all, fields(db = %db_configuration.display_connection_string()))]
    pub async fn connect(
        db_configuration: &DatabaseConfiguration,
        password_provider: &dyn DatabasePasswordProvider,
    ) -> Result<PgPool, DatabaseError> {
        let db_password = password_provider.provide_password().await?;

        let connect_options = Self::connect_options(db_configuration, db_password.as_ref());

        let pg_pool = Self::pool_options(db_configuration)
            .connect_with(connect_options)
            .await
            .map_err(|source| DatabaseError::Connect {
                connection_string: db_configuration.display_connection_string(),
                source,
            })?;

        tracing::info!("Connected to database");

        Ok(pg_pool)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
