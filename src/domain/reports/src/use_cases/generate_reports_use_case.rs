// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::NaiveDate;
use datafusion::arrow::array::RecordBatch;
use datafusion::arrow::datatypes::SchemaRef;
use internal_error::InternalError;
use thiserror::Error;

use crate::{ReadRelationError, ReportError, ReportKind, SourceRelation};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_PREVIEW_LIMIT: usize = 20;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait GenerateReportsUseCase: Send + Sync {
    async fn execute(&self, request: ReportsRequest) -> Result<ReportsResponse, GenerateReportsError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportsRequest {
    /// Relations to show the first rows of
    pub previews: Vec<SourceRelation>,
    pub preview_limit: usize,
    pub reports: Vec<ReportKind>,
    /// Date to evaluate occupancy at, defaults to the current local date
    pub as_of: Option<NaiveDate>,
}

impl ReportsRequest {
    /// Everything the demo run shows: orders and clients previews followed by
    /// all the reports
    pub fn full() -> Self {
        Self {
            previews: vec![SourceRelation::Orders, SourceRelation::Clients],
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            reports: vec![
                ReportKind::RoomRevenue,
                ReportKind::ClientActivity,
                ReportKind::BusyRooms,
            ],
            as_of: None,
        }
    }

    pub fn previews_only(previews: Vec<SourceRelation>) -> Self {
        Self {
            previews,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            reports: Vec::new(),
            as_of: None,
        }
    }

    pub fn single_report(kind: ReportKind) -> Self {
        Self {
            previews: Vec::new(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            reports: vec![kind],
            as_of: None,
        }
    }

    pub fn with_preview_limit(self, preview_limit: usize) -> Self {
        Self {
            preview_limit,
            ..self
        }
    }

    pub fn with_as_of(self, as_of: Option<NaiveDate>) -> Self {
        Self { as_of, ..self }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct ReportsResponse {
    /// Date the busy rooms report was evaluated at
    pub as_of: NaiveDate,
    pub previews: Vec<RelationPreview>,
    pub reports: Vec<ReportOutput>,
}

#[derive(Debug)]
pub struct RelationPreview {
    pub relation: SourceRelation,
    pub schema: SchemaRef,
    pub batches: Vec<RecordBatch>,
}

#[derive(Debug)]
pub struct ReportOutput {
    pub kind: ReportKind,
    pub schema: SchemaRef,
    pub batches: Vec<RecordBatch>,
}

impl ReportOutput {
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum GenerateReportsError {
    #[error(transparent)]
    ReadRelation(#[from] ReadRelationError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
