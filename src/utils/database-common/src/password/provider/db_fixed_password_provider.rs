// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::{ExposeSecret, SecretString};

use crate::{DatabaseCredentialsError, DatabasePasswordProvider};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct DatabaseFixedPasswordProvider {
    fixed_password: SecretString,
}

impl DatabaseFixedPasswordProvider {
    pub fn new(fixed_password: SecretString) -> Self {
        Self { fixed_password }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl DatabasePasswordProvider for DatabaseFixedPasswordProvider {
    async fn provide_password(&self) -> Result<Option<SecretString>, DatabaseCredentialsError> {
        Ok(Some(SecretString::from(
            self.fixed_password.expose_secret().to_owned(),
        )))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
