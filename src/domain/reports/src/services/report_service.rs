// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::NaiveDate;
use data_utils::data::DataFrameExt;
use internal_error::InternalError;
use thiserror::Error;

use crate::SchemaMismatchError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Builds lazy report pipelines over source relations. Nothing is executed
/// until the returned dataframes are collected.
pub trait ReportService: Send + Sync {
    /// Per-room revenue: `room_number, price_sum, orders_count`
    fn room_revenue(&self, orders: DataFrameExt) -> Result<DataFrameExt, ReportError>;

    /// Per-client payments of clients with at least one order:
    /// `passport, last_arrived, payed_sum, orders_count`
    fn client_activity(
        &self,
        clients: DataFrameExt,
        orders: DataFrameExt,
    ) -> Result<DataFrameExt, ReportError>;

    /// Rooms occupied on `today`: `busy_rooms`
    fn busy_rooms(&self, orders: DataFrameExt, today: NaiveDate)
    -> Result<DataFrameExt, ReportError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatchError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
