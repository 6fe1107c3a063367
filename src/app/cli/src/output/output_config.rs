// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::output::records_writers::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub quiet: bool,
    pub verbosity_level: u8,
    /// Whether the output is attended by a user
    pub is_tty: bool,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            verbosity_level: 0,
            is_tty: false,
            format: OutputFormat::Table,
        }
    }
}

impl OutputConfig {
    /// Chooses the format for an unspecified `--output-format`: human-readable
    /// tables for terminals, JSON for pipes
    pub fn new(
        quiet: bool,
        verbosity_level: u8,
        is_tty: bool,
        format: Option<OutputFormat>,
    ) -> Self {
        let format = format.unwrap_or(if is_tty {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        });

        Self {
            quiet,
            verbosity_level,
            is_tty,
            format,
        }
    }

    pub fn get_records_writer(&self, fmt: RecordsFormat) -> Box<dyn RecordsWriter> {
        match self.format {
            OutputFormat::Csv => Box::new(CsvWriter::new(std::io::stdout())),
            OutputFormat::Json => Box::new(JsonArrayWriter::new(std::io::stdout())),
            OutputFormat::Table => Box::new(TableWriter::new(fmt, std::io::stdout())),
        }
    }

    /// Section titles only accompany human-readable output
    pub fn show_titles(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Table
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values
    Csv,
    /// Array of records
    Json,
    /// A pretty human-readable table
    Table,
}
