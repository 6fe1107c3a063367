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
use datafusion::arrow::datatypes::Date32Type;
use datafusion::common::ScalarValue;
use datafusion::functions_aggregate::expr_fn::{count, max, sum};
use datafusion::prelude::*;
use dill::*;
use hotel_reports::*;
use internal_error::ResultIntoInternal;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn ReportService)]
pub struct ReportServiceImpl {}

impl ReportServiceImpl {
    fn require_columns(
        relation: SourceRelation,
        df: &DataFrameExt,
        columns: &[&str],
    ) -> Result<(), SchemaMismatchError> {
        match df.missing_columns(columns).first() {
            None => Ok(()),
            Some(column) => Err(SchemaMismatchError::missing_column(relation, *column)),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl ReportService for ReportServiceImpl {
    #[tracing::instrument(level = "debug", skip_all)]
    fn room_revenue(&self, orders: DataFrameExt) -> Result<DataFrameExt, ReportError> {
        Self::require_columns(
            SourceRelation::Orders,
            &orders,
            &[orders::ROOM_NUMBER, orders::PRICE],
        )?;

        let df = orders
            .aggregate(
                vec![col(orders::ROOM_NUMBER)],
                vec![
                    sum(col(orders::PRICE)).alias(room_revenue::PRICE_SUM),
                    count(col(orders::ROOM_NUMBER)).alias(room_revenue::ORDERS_COUNT),
                ],
            )
            .int_err()?
            .sort(vec![col(room_revenue::ROOM_NUMBER).sort(true, false)])
            .int_err()?;

        Ok(df)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn client_activity(
        &self,
        clients: DataFrameExt,
        orders: DataFrameExt,
    ) -> Result<DataFrameExt, ReportError> {
        let order_columns = [
            orders::ORDER_ID,
            orders::CLIENT_PASSPORT,
            orders::PRICE,
            orders::ARRIVAL_DATE,
        ];
        Self::require_columns(SourceRelation::Clients, &clients, &[clients::PASSPORT])?;
        Self::require_columns(SourceRelation::Orders, &orders, &order_columns)?;

        // Narrow both sides so that extra columns cannot collide in the join
        let clients = clients.select_columns(&[clients::PASSPORT]).int_err()?;
        let orders = orders.select_columns(&order_columns).int_err()?;

        let df = clients
            .join(
                orders,
                JoinType::Inner,
                &[clients::PASSPORT],
                &[orders::CLIENT_PASSPORT],
                None,
            )
            .int_err()?
            .aggregate(
                vec![col(clients::PASSPORT)],
                vec![
                    max(col(orders::ARRIVAL_DATE)).alias(client_activity::LAST_ARRIVED),
                    sum(col(orders::PRICE)).alias(client_activity::PAYED_SUM),
                    count(col(orders::ORDER_ID)).alias(client_activity::ORDERS_COUNT),
                ],
            )
            .int_err()?
            .sort(vec![
                col(client_activity::LAST_ARRIVED).sort(true, true),
                col(client_activity::PASSPORT).sort(true, true),
            ])
            .int_err()?;

        Ok(df)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%today))]
    fn busy_rooms(
        &self,
        orders: DataFrameExt,
        today: NaiveDate,
    ) -> Result<DataFrameExt, ReportError> {
        Self::require_columns(
            SourceRelation::Orders,
            &orders,
            &[
                orders::ROOM_NUMBER,
                orders::ARRIVAL_DATE,
                orders::DEPARTURE_DATE,
            ],
        )?;

        let today = lit(ScalarValue::Date32(Some(Date32Type::from_naive_date(today))));

        // Stay is a half-open interval: the departure day is free
        let df = orders
            .filter(
                col(orders::ARRIVAL_DATE)
                    .lt_eq(today.clone())
                    .and(col(orders::DEPARTURE_DATE).gt(today)),
            )
            .int_err()?
            .select(vec![col(orders::ROOM_NUMBER).alias(busy_rooms::BUSY_ROOMS)])
            .int_err()?
            .distinct()
            .int_err()?
            .sort(vec![col(busy_rooms::BUSY_ROOMS).sort(true, false)])
            .int_err()?;

        Ok(df)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
