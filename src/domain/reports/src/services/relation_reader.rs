// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use data_utils::data::DataFrameExt;
use datafusion::prelude::SessionContext;
use internal_error::{BoxedError, InternalError};
use thiserror::Error;

use crate::{SchemaMismatchError, SourceRelation};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Loads a source relation into the session, registering it as a table
/// under [`SourceRelation::table_name`]
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait::async_trait]
pub trait RelationReader: Send + Sync {
    async fn read_relation(
        &self,
        ctx: &SessionContext,
        relation: SourceRelation,
    ) -> Result<DataFrameExt, ReadRelationError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum ReadRelationError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatchError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
#[error("Database connection failed: {source}")]
pub struct ConnectionError {
    #[source]
    pub source: BoxedError,
}

impl ConnectionError {
    pub fn new(source: impl Into<BoxedError>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
