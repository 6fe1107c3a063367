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

use crate::{ReadRelationError, RelationReader, SourceRelation};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Source relations read once per run and registered in a session
#[derive(Debug, Clone)]
pub struct SourceSnapshot {
    pub orders: DataFrameExt,
    pub clients: DataFrameExt,
    pub rooms: DataFrameExt,
}

impl SourceSnapshot {
    /// Reads all relations concurrently and verifies their required columns.
    /// Fails on the first error without returning partial data.
    #[tracing::instrument(level = "info", skip_all)]
    pub async fn load(
        ctx: &SessionContext,
        reader: &dyn RelationReader,
    ) -> Result<Self, ReadRelationError> {
        let (orders, clients, rooms) = tokio::try_join!(
            reader.read_relation(ctx, SourceRelation::Orders),
            reader.read_relation(ctx, SourceRelation::Clients),
            reader.read_relation(ctx, SourceRelation::Rooms),
        )?;

        let snapshot = Self {
            orders,
            clients,
            rooms,
        };

        for relation in [
            SourceRelation::Orders,
            SourceRelation::Clients,
            SourceRelation::Rooms,
        ] {
            relation.check_columns(snapshot.get(relation))?;
        }

        tracing::debug!("Source snapshot loaded");

        Ok(snapshot)
    }

    pub fn get(&self, relation: SourceRelation) -> &DataFrameExt {
        match relation {
            SourceRelation::Orders => &self.orders,
            SourceRelation::Clients => &self.clients,
            SourceRelation::Rooms => &self.rooms,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
