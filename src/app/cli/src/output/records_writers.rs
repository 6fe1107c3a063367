// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::io::Write;

use arrow::array::{ArrayRef, RecordBatch};
use arrow::util::display::array_value_to_string;
use prettytable::{Cell, Row, Table};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub trait RecordsWriter {
    fn write_batch(&mut self, records: &RecordBatch) -> Result<(), std::io::Error>;

    fn write_batches(&mut self, record_batches: &[RecordBatch]) -> Result<(), std::io::Error> {
        for records in record_batches {
            self.write_batch(records)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), std::io::Error> {
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct RecordsFormat {
    column_formats: Vec<ColumnFormat>,
    default_column_format: ColumnFormat,
}

impl RecordsFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column_formats(self, column_formats: Vec<ColumnFormat>) -> Self {
        Self {
            column_formats,
            ..self
        }
    }

    pub fn with_default_column_format(self, default_column_format: ColumnFormat) -> Self {
        Self {
            default_column_format,
            ..self
        }
    }

    pub fn get_style_spec(&self, column: usize) -> &str {
        self.column_formats
            .get(column)
            .and_then(|cf| cf.style_spec.as_deref())
            .or(self.default_column_format.style_spec.as_deref())
            .unwrap_or("")
    }

    pub fn format(&self, row: usize, col: usize, array: &ArrayRef) -> String {
        if array.is_null(row) {
            return self
                .column_formats
                .get(col)
                .and_then(|cf| cf.null_value.clone())
                .or_else(|| self.default_column_format.null_value.clone())
                .unwrap_or_default();
        }

        let mut value = match array_value_to_string(array, row) {
            Ok(value) => value,
            Err(_) => "<unprintable>".to_string(),
        };

        if let Some(max_len) = self
            .column_formats
            .get(col)
            .and_then(|cf| cf.max_len)
            .or(self.default_column_format.max_len)
        {
            // Quick bytes check
            if value.len() > max_len {
                if let Some((byte_index, _)) = value.char_indices().nth(max_len) {
                    value.truncate(byte_index);
                    value.push_str("...");
                }
            }
        }

        value
    }
}

impl Default for RecordsFormat {
    fn default() -> Self {
        Self {
            column_formats: Vec::new(),
            default_column_format: ColumnFormat::new()
                .with_style_spec("r")
                .with_null_value("")
                .with_max_len(90),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default)]
pub struct ColumnFormat {
    style_spec: Option<String>,
    null_value: Option<String>,
    max_len: Option<usize>,
}

impl ColumnFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style_spec(self, style_spec: impl Into<String>) -> Self {
        Self {
            style_spec: Some(style_spec.into()),
            ..self
        }
    }

    pub fn with_null_value(self, null_value: impl Into<String>) -> Self {
        Self {
            null_value: Some(null_value.into()),
            ..self
        }
    }

    pub fn with_max_len(self, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..self
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct TableWriter<W> {
    format: RecordsFormat,
    header_written: bool,
    rows_written: usize,
    num_columns: usize,
    table: Table,
    out: W,
}

impl<W: Write> TableWriter<W> {
    pub fn new(format: RecordsFormat, out: W) -> Self {
        let mut table = Table::new();
        table.set_format(Self::get_table_format());

        Self {
            format,
            header_written: false,
            rows_written: 0,
            num_columns: 0,
            table,
            out,
        }
    }

    pub fn get_table_format() -> prettytable::format::TableFormat {
        use prettytable::format::*;

        FormatBuilder::new()
            .column_separator('│')
            .borders('│')
            .separators(&[LinePosition::Top], LineSeparator::new('─', '┬', '┌', '┐'))
            .separators(
                &[LinePosition::Title],
                LineSeparator::new('─', '┼', '├', '┤'),
            )
            .separators(
                &[LinePosition::Bottom],
                LineSeparator::new('─', '┴', '└', '┘'),
            )
            .padding(1, 1)
            .build()
    }
}

impl<W: Write> RecordsWriter for TableWriter<W> {
    fn write_batch(&mut self, records: &RecordBatch) -> Result<(), std::io::Error> {
        if !self.header_written {
            let mut header = Vec::new();
            for field in records.schema().fields() {
                header.push(Cell::new(field.name()).style_spec("bc"));
            }
            self.table.set_titles(Row::new(header));
            self.header_written = true;
            self.num_columns = records.num_columns();
        }

        for row in 0..records.num_rows() {
            let mut cells = Vec::new();
            for col in 0..records.num_columns() {
                let array = records.column(col);

                let style_spec = self.format.get_style_spec(col);
                let value = self.format.format(row, col, array);
                cells.push(Cell::new(&value).style_spec(style_spec));
            }
            self.table.add_row(Row::new(cells));
            self.rows_written += 1;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<(), std::io::Error> {
        // Header doesn't render when there are no data rows in the table so we
        // add an empty row
        if self.rows_written == 0 {
            let row = self.table.add_empty_row();
            for _ in 0..self.num_columns {
                row.add_cell(Cell::new(""));
            }
        }

        self.table.print(&mut self.out)?;
        self.out.flush()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct CsvWriter<W: Write> {
    // Taken on finish
    writer: Option<arrow::csv::Writer<W>>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: Some(
                arrow::csv::WriterBuilder::new()
                    .with_header(true)
                    .build(out),
            ),
        }
    }
}

impl<W: Write> RecordsWriter for CsvWriter<W> {
    fn write_batch(&mut self, records: &RecordBatch) -> Result<(), std::io::Error> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(std::io::Error::other("Writer is already finished"));
        };
        writer.write(records).map_err(std::io::Error::other)
    }

    fn finish(&mut self) -> Result<(), std::io::Error> {
        if let Some(writer) = self.writer.take() {
            writer.into_inner().flush()?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct JsonArrayWriter<W: Write> {
    // Taken on finish
    writer: Option<arrow::json::ArrayWriter<W>>,
}

impl<W: Write> JsonArrayWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: Some(arrow::json::ArrayWriter::new(out)),
        }
    }
}

impl<W: Write> RecordsWriter for JsonArrayWriter<W> {
    fn write_batch(&mut self, records: &RecordBatch) -> Result<(), std::io::Error> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(std::io::Error::other("Writer is already finished"));
        };
        writer.write(records).map_err(std::io::Error::other)
    }

    fn finish(&mut self) -> Result<(), std::io::Error> {
        if let Some(mut writer) = self.writer.take() {
            writer.finish().map_err(std::io::Error::other)?;
            let mut out = writer.into_inner();
            out.write_all(b"\n")?;
            out.flush()?;
        }
        Ok(())
    }
}
