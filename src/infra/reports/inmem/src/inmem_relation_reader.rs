// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::Arc;

use data_utils::data::DataFrameExt;
use datafusion::arrow::array::RecordBatch;
use datafusion::arrow::datatypes::SchemaRef;
use datafusion::datasource::MemTable;
use datafusion::prelude::SessionContext;
use hotel_reports::*;
use internal_error::ResultIntoInternal;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
struct RelationData {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

/// Serves pre-built record batches as source relations
#[derive(Debug, Clone, Default)]
pub struct InMemoryRelationReader {
    relations: HashMap<SourceRelation, RelationData>,
}

impl InMemoryRelationReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relation(
        mut self,
        relation: SourceRelation,
        schema: SchemaRef,
        batches: Vec<RecordBatch>,
    ) -> Self {
        self.add_relation(relation, schema, batches);
        self
    }

    pub fn add_relation(
        &mut self,
        relation: SourceRelation,
        schema: SchemaRef,
        batches: Vec<RecordBatch>,
    ) {
        self.relations
            .insert(relation, RelationData { schema, batches });
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl RelationReader for InMemoryRelationReader {
    #[tracing::instrument(level = "debug", skip_all, fields(%relation))]
    async fn read_relation(
        &self,
        ctx: &SessionContext,
        relation: SourceRelation,
    ) -> Result<DataFrameExt, ReadRelationError> {
        let Some(data) = self.relations.get(&relation) else {
            return Err(SchemaMismatchError::missing_table(relation).into());
        };

        let table = MemTable::try_new(data.schema.clone(), vec![data.batches.clone()]).int_err()?;

        ctx.register_table(relation.table_name(), Arc::new(table))
            .int_err()?;

        let df = ctx.table(relation.table_name()).await.int_err()?;

        Ok(df.into())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
