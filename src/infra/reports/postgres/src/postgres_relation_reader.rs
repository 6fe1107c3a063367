// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use data_utils::data::DataFrameExt;
use database_common::PostgresConnectionPool;
use datafusion::arrow::array::RecordBatch;
use datafusion::arrow::datatypes::Schema;
use datafusion::datasource::MemTable;
use datafusion::prelude::SessionContext;
use dill::*;
use hotel_reports::*;
use internal_error::{ErrorIntoInternal, ResultIntoInternal};
use sqlx::PgPool;

use crate::{PgColumn, PgColumnInfo, select_statement};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Loads whole tables from PostgreSQL and registers them in the session as
/// in-memory tables
pub struct PostgresRelationReader {
    connection_pool: Arc<PostgresConnectionPool>,
}

#[component(pub)]
#[interface(dyn RelationReader)]
impl PostgresRelationReader {
    pub fn new(connection_pool: Arc<PostgresConnectionPool>) -> Self {
        Self { connection_pool }
    }
}

impl PostgresRelationReader {
    async fn pool(&self) -> Result<&PgPool, ReadRelationError> {
        self.connection_pool
            .pool()
            .await
            .map_err(|e| ConnectionError::new(e).into())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%schema, %table))]
    pub async fn discover_columns(
        pg_pool: &PgPool,
        schema: &str,
        table: &str,
    ) -> Result<Vec<PgColumn>, ReadRelationError> {
        let columns = sqlx::query_as::<_, PgColumnInfo>(
            r#"
            SELECT
                column_name::text AS column_name,
                data_type::text AS data_type,
                is_nullable::text AS is_nullable,
                numeric_precision::int4 AS numeric_precision,
                numeric_scale::int4 AS numeric_scale
            FROM information_schema.columns
            WHERE table_schema = $1 AND table_name = $2
            ORDER BY ordinal_position
            "#,
        )
        .bind(schema)
        .bind(table)
        .fetch_all(pg_pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(columns.into_iter().map(PgColumn::from).collect())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl RelationReader for PostgresRelationReader {
    #[tracing::instrument(level = "info", skip_all, fields(%relation))]
    async fn read_relation(
        &self,
        ctx: &SessionContext,
        relation: SourceRelation,
    ) -> Result<DataFrameExt, ReadRelationError> {
        let pg_pool = self.pool().await?;
        let db_schema = &self.connection_pool.db_configuration().schema;
        let table = relation.table_name();

        let columns = Self::discover_columns(pg_pool, db_schema, table).await?;
        if columns.is_empty() {
            return Err(SchemaMismatchError::missing_table(relation).into());
        }

        let query = select_statement(db_schema, table, &columns);
        tracing::debug!(%query, "Reading relation");

        let rows = sqlx::query(&query)
            .fetch_all(pg_pool)
            .await
            .map_err(map_sqlx_error)?;

        let arrow_schema = Arc::new(Schema::new(
            columns.iter().map(PgColumn::arrow_field).collect::<Vec<_>>(),
        ));
        let arrays = columns
            .iter()
            .enumerate()
            .map(|(index, column)| column.to_array(&rows, index))
            .collect::<Result<Vec<_>, _>>()?;

        let batch = RecordBatch::try_new(arrow_schema.clone(), arrays).int_err()?;
        tracing::info!(num_rows = batch.num_rows(), "Relation loaded");

        let mem_table = MemTable::try_new(arrow_schema, vec![vec![batch]]).int_err()?;
        ctx.register_table(table, Arc::new(mem_table)).int_err()?;

        let df = ctx.table(table).await.int_err()?;

        Ok(df.into())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn map_sqlx_error(e: sqlx::Error) -> ReadRelationError {
    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => ConnectionError::new(e).into(),
        _ => e.int_err().into(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
