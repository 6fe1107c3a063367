// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::io::Write;

use arrow::array::RecordBatch;
use arrow::datatypes::SchemaRef;
use hotel_reports::{RelationPreview, ReportOutput, ReportsResponse};

use super::CLIError;
use crate::output::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Prints the response sections in order: loaded data previews followed by
/// the reports. JSON output is a single labeled document.
pub struct ReportsPrinter<'a> {
    output_config: &'a OutputConfig,
}

impl<'a> ReportsPrinter<'a> {
    pub fn new(output_config: &'a OutputConfig) -> Self {
        Self { output_config }
    }

    pub fn print_response(&self, response: &ReportsResponse) -> Result<(), CLIError> {
        if self.output_config.format == OutputFormat::Json {
            return self.print_document(response);
        }

        if !response.previews.is_empty() {
            self.print_title("Loaded data from DB")?;
            for preview in &response.previews {
                self.print_preview(preview)?;
            }
        }

        for report in &response.reports {
            self.print_report(report, response)?;
        }

        Ok(())
    }

    pub fn print_preview(&self, preview: &RelationPreview) -> Result<(), CLIError> {
        self.print_subtitle(preview.relation.table_name())?;
        self.write_records(&preview.schema, &preview.batches)
    }

    pub fn print_report(
        &self,
        report: &ReportOutput,
        response: &ReportsResponse,
    ) -> Result<(), CLIError> {
        self.print_title(&report_title(report.kind, response.as_of))?;
        self.write_records(&report.schema, &report.batches)
    }

    fn print_document(&self, response: &ReportsResponse) -> Result<(), CLIError> {
        let json = ResponseDocument::new(response)?.to_json_pretty()?;

        let mut out = std::io::stdout().lock();
        writeln!(out, "{json}")?;
        out.flush()?;
        Ok(())
    }

    fn print_title(&self, title: &str) -> Result<(), CLIError> {
        if !self.output_config.show_titles() {
            return Ok(());
        }

        let mut out = std::io::stdout().lock();
        writeln!(
            out,
            "{}",
            console::style(format!("========= {title} =========")).bold()
        )?;
        Ok(())
    }

    fn print_subtitle(&self, subtitle: &str) -> Result<(), CLIError> {
        if !self.output_config.show_titles() {
            return Ok(());
        }

        let mut out = std::io::stdout().lock();
        writeln!(out, "{}:", console::style(subtitle).dim())?;
        Ok(())
    }

    fn write_records(&self, schema: &SchemaRef, batches: &[RecordBatch]) -> Result<(), CLIError> {
        let mut writer = self
            .output_config
            .get_records_writer(RecordsFormat::default());

        // Empty results still show the header
        if batches.is_empty() {
            writer.write_batch(&RecordBatch::new_empty(schema.clone()))?;
        } else {
            writer.write_batches(batches)?;
        }

        writer.finish()?;
        Ok(())
    }
}
