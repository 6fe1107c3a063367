// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error(transparent)]
    Credentials(#[from] DatabaseCredentialsError),

    #[error("Failed to connect to {connection_string}")]
    Connect {
        connection_string: String,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum DatabaseCredentialsError {
    #[error("Database password is not provided, set the {env_var} environment variable")]
    PasswordEnvVarNotSet { env_var: String },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
