// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use arrow::array::RecordBatch;
use arrow::datatypes::SchemaRef;
use chrono::NaiveDate;
use hotel_reports::{ReportKind, ReportsResponse};
use serde_json::value::RawValue;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Machine-readable rendition of a whole response. Every section is labeled
/// and lists its columns, so empty results stay self-describing.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDocument {
    pub as_of: NaiveDate,
    pub previews: Vec<PreviewDocument>,
    pub reports: Vec<ReportDocument>,
}

#[derive(Debug, serde::Serialize)]
pub struct PreviewDocument {
    pub table: &'static str,
    pub columns: Vec<String>,
    pub rows: Box<RawValue>,
}

#[derive(Debug, serde::Serialize)]
pub struct ReportDocument {
    pub report: String,
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Box<RawValue>,
}

impl ResponseDocument {
    pub fn new(response: &ReportsResponse) -> Result<Self, std::io::Error> {
        let previews = response
            .previews
            .iter()
            .map(|p| {
                Ok(PreviewDocument {
                    table: p.relation.table_name(),
                    columns: column_names(&p.schema),
                    rows: json_rows(&p.batches)?,
                })
            })
            .collect::<Result<_, std::io::Error>>()?;

        let reports = response
            .reports
            .iter()
            .map(|r| {
                Ok(ReportDocument {
                    report: r.kind.to_string(),
                    title: report_title(r.kind, response.as_of),
                    columns: column_names(&r.schema),
                    rows: json_rows(&r.batches)?,
                })
            })
            .collect::<Result<_, std::io::Error>>()?;

        Ok(Self {
            as_of: response.as_of,
            previews,
            reports,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, std::io::Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn report_title(kind: ReportKind, as_of: NaiveDate) -> String {
    match kind {
        ReportKind::BusyRooms => format!("{} as of {as_of}", kind.title()),
        _ => kind.title().to_string(),
    }
}

fn column_names(schema: &SchemaRef) -> Vec<String> {
    schema.fields().iter().map(|f| f.name().clone()).collect()
}

fn json_rows(batches: &[RecordBatch]) -> Result<Box<RawValue>, std::io::Error> {
    let mut writer = arrow::json::ArrayWriter::new(Vec::new());
    for batch in batches {
        writer.write(batch).map_err(std::io::Error::other)?;
    }
    writer.finish().map_err(std::io::Error::other)?;

    let json = String::from_utf8(writer.into_inner()).map_err(std::io::Error::other)?;
    Ok(RawValue::from_string(json)?)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
