// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::{Singleton, component, scope};
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Shared pool that is opened on first use. Concurrent callers wait for the
/// same connection attempt.
pub struct PostgresConnectionPool {
    db_configuration: Arc<DatabaseConfiguration>,
    password_provider: Arc<dyn DatabasePasswordProvider>,
    pg_pool: OnceCell<PgPool>,
}

#[component(pub)]
#[scope(Singleton)]
impl PostgresConnectionPool {
    pub fn new(
        db_configuration: Arc<DatabaseConfiguration>,
        password_provider: Arc<dyn DatabasePasswordProvider>,
    ) -> Self {
        Self {
            db_configuration,
            password_provider,
            pg_pool: OnceCell::new(),
        }
    }
}

impl PostgresConnectionPool {
    /// Wraps an already open pool
    pub fn from_pool(db_configuration: Arc<DatabaseConfiguration>, pg_pool: PgPool) -> Self {
        Self {
            db_configuration,
            password_provider: Arc::new(NoPasswordProvider),
            pg_pool: OnceCell::new_with(Some(pg_pool)),
        }
    }

    pub fn db_configuration(&self) -> &DatabaseConfiguration {
        &self.db_configuration
    }

    pub async fn pool(&self) -> Result<&PgPool, DatabaseError> {
        self.pg_pool
            .get_or_try_init(|| {
                PostgresPlugin::connect(&self.db_configuration, self.password_provider.as_ref())
            })
            .await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct NoPasswordProvider;

#[async_trait::async_trait]
impl DatabasePasswordProvider for NoPasswordProvider {
    async fn provide_password(
        &self,
    ) -> Result<Option<secrecy::SecretString>, DatabaseCredentialsError> {
        Ok(None)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
