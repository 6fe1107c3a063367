// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::SecretString;

use crate::{DatabaseCredentialsError, DatabasePasswordProvider};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_PASSWORD_ENV_VAR: &str = "DB_PASSWORD";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reads the password from an environment variable at connection time
pub struct DatabaseEnvPasswordProvider {
    env_var: String,
}

impl DatabaseEnvPasswordProvider {
    pub fn new(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
        }
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl DatabasePasswordProvider for DatabaseEnvPasswordProvider {
    async fn provide_password(&self) -> Result<Option<SecretString>, DatabaseCredentialsError> {
        match std::env::var(&self.env_var) {
            Ok(password) => Ok(Some(SecretString::from(password))),
            Err(_) => Err(DatabaseCredentialsError::PasswordEnvVarNotSet {
                env_var: self.env_var.clone(),
            }),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
