// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::NaiveDate;
use data_utils::data::DataFrameExt;
use dill::*;
use hotel_reports::*;
use internal_error::ResultIntoInternal;
use time_source::SystemTimeSource;

use crate::SessionContextBuilder;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct GenerateReportsUseCaseImpl {
    relation_reader: Arc<dyn RelationReader>,
    report_service: Arc<dyn ReportService>,
    session_context_builder: Arc<SessionContextBuilder>,
    time_source: Arc<dyn SystemTimeSource>,
}

#[component(pub)]
#[interface(dyn GenerateReportsUseCase)]
impl GenerateReportsUseCaseImpl {
    pub fn new(
        relation_reader: Arc<dyn RelationReader>,
        report_service: Arc<dyn ReportService>,
        session_context_builder: Arc<SessionContextBuilder>,
        time_source: Arc<dyn SystemTimeSource>,
    ) -> Self {
        Self {
            relation_reader,
            report_service,
            session_context_builder,
            time_source,
        }
    }

    fn build_report(
        &self,
        kind: ReportKind,
        snapshot: &SourceSnapshot,
        as_of: NaiveDate,
    ) -> Result<DataFrameExt, ReportError> {
        match kind {
            ReportKind::RoomRevenue => self.report_service.room_revenue(snapshot.orders.clone()),
            ReportKind::ClientActivity => self
                .report_service
                .client_activity(snapshot.clients.clone(), snapshot.orders.clone()),
            ReportKind::BusyRooms => self
                .report_service
                .busy_rooms(snapshot.orders.clone(), as_of),
        }
    }

    async fn collect_preview(
        relation: SourceRelation,
        df: DataFrameExt,
    ) -> Result<RelationPreview, GenerateReportsError> {
        let schema = df.schema().inner().clone();
        let batches = df.collect().await.int_err()?;
        Ok(RelationPreview {
            relation,
            schema,
            batches,
        })
    }

    async fn collect_report(
        kind: ReportKind,
        df: DataFrameExt,
    ) -> Result<ReportOutput, GenerateReportsError> {
        let schema = df.schema().inner().clone();
        let batches = df.collect().await.int_err()?;

        let output = ReportOutput {
            kind,
            schema,
            batches,
        };
        tracing::debug!(report = %kind, num_rows = output.num_rows(), "Report computed");

        Ok(output)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl GenerateReportsUseCase for GenerateReportsUseCaseImpl {
    #[tracing::instrument(level = "info", name = "GenerateReportsUseCaseImpl::execute", skip_all)]
    async fn execute(
        &self,
        request: ReportsRequest,
    ) -> Result<ReportsResponse, GenerateReportsError> {
        let as_of = request.as_of.unwrap_or_else(|| self.time_source.today());

        let mut relations = request.previews;
        relations.sort();
        relations.dedup();

        let mut kinds = request.reports;
        kinds.sort();
        kinds.dedup();

        tracing::info!(%as_of, ?relations, ?kinds, "Generating reports");

        // Session lives for the duration of this run only
        let ctx = self.session_context_builder.session_context();

        let snapshot = SourceSnapshot::load(&ctx, self.relation_reader.as_ref()).await?;

        let mut preview_futures = Vec::with_capacity(relations.len());
        for relation in relations {
            let df = snapshot
                .get(relation)
                .clone()
                .limit(0, Some(request.preview_limit))
                .int_err()?;
            preview_futures.push(Self::collect_preview(relation, df));
        }

        let mut report_futures = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let df = self.build_report(kind, &snapshot, as_of)?;
            report_futures.push(Self::collect_report(kind, df));
        }

        let (previews, reports) = tokio::try_join!(
            futures::future::try_join_all(preview_futures),
            futures::future::try_join_all(report_futures),
        )?;

        Ok(ReportsResponse {
            as_of,
            previews,
            reports,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
