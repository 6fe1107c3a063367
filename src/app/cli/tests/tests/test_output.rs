// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use arrow::array::{ArrayRef, Int32Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use hotel_reports::{RelationPreview, ReportKind, ReportOutput, ReportsResponse, SourceRelation};
use hotel_reports_cli::*;
use hotel_reports_inmem::testing::{date, rooms_batch, rooms_schema};
use indoc::indoc;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn sample_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("room_number", DataType::Int32, false),
        Field::new("category", DataType::Utf8, true),
    ]));

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int32Array::from(vec![101, 102])) as ArrayRef,
            Arc::new(StringArray::from(vec![Some("suite"), None])) as ArrayRef,
        ],
    )
    .unwrap()
}

fn write_all(writer: &mut dyn RecordsWriter, batches: &[RecordBatch]) {
    writer.write_batches(batches).unwrap();
    writer.finish().unwrap();
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_default_output_format() {
    assert_eq!(
        OutputConfig::new(false, 0, true, None).format,
        OutputFormat::Table
    );
    assert_eq!(
        OutputConfig::new(false, 0, false, None).format,
        OutputFormat::Json
    );
    assert_eq!(
        OutputConfig::new(false, 0, true, Some(OutputFormat::Csv)).format,
        OutputFormat::Csv
    );
}

#[test]
fn test_titles_only_shown_for_tables() {
    assert!(OutputConfig::new(false, 0, true, None).show_titles());
    assert!(!OutputConfig::new(true, 0, true, None).show_titles());
    assert!(!OutputConfig::new(false, 0, true, Some(OutputFormat::Json)).show_titles());
}

#[test]
fn test_csv_writer() {
    let mut buf = Vec::new();
    write_all(&mut CsvWriter::new(&mut buf), &[sample_batch()]);

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        indoc!(
            "
            room_number,category
            101,suite
            102,
            "
        )
    );
}

#[test]
fn test_json_writer() {
    let mut buf = Vec::new();
    write_all(&mut JsonArrayWriter::new(&mut buf), &[sample_batch()]);

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "[{\"room_number\":101,\"category\":\"suite\"},{\"room_number\":102}]\n"
    );
}

#[test]
fn test_json_writer_empty() {
    let mut buf = Vec::new();
    write_all(&mut JsonArrayWriter::new(&mut buf), &[]);

    assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
}

#[test]
fn test_table_writer() {
    let mut buf = Vec::new();
    write_all(
        &mut TableWriter::new(RecordsFormat::default(), &mut buf),
        &[sample_batch()],
    );

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        indoc!(
            "
            ┌─────────────┬──────────┐
            │ room_number │ category │
            ├─────────────┼──────────┤
            │         101 │    suite │
            │         102 │          │
            └─────────────┴──────────┘
            "
        )
    );
}

#[test]
fn test_table_writer_renders_header_without_rows() {
    let mut buf = Vec::new();
    write_all(
        &mut TableWriter::new(RecordsFormat::default(), &mut buf),
        &[RecordBatch::new_empty(sample_batch().schema())],
    );

    let output = String::from_utf8(buf).unwrap();
    assert!(output.contains("│ room_number │ category │"), "{output}");
}

#[test]
fn test_records_format_truncates_long_values() {
    let array: ArrayRef = Arc::new(StringArray::from(vec![Some("abcdefgh"), None]));

    let format = RecordsFormat::new().with_default_column_format(
        ColumnFormat::new()
            .with_max_len(3)
            .with_null_value("<null>"),
    );

    assert_eq!(format.format(0, 0, &array), "abc...");
    assert_eq!(format.format(1, 0, &array), "<null>");
}

#[test]
fn test_response_document_labels_every_section() {
    let busy_rooms = Arc::new(Schema::new(vec![Field::new(
        "busy_rooms",
        DataType::Int32,
        false,
    )]));
    let response = ReportsResponse {
        as_of: date("2024-05-10"),
        previews: vec![RelationPreview {
            relation: SourceRelation::Rooms,
            schema: rooms_schema(),
            batches: vec![rooms_batch(&[(101, "single")])],
        }],
        reports: vec![ReportOutput {
            kind: ReportKind::BusyRooms,
            schema: busy_rooms,
            batches: Vec::new(),
        }],
    };

    let json = ResponseDocument::new(&response)
        .unwrap()
        .to_json_pretty()
        .unwrap();
    let actual: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Empty report still names its columns
    assert_eq!(
        actual,
        serde_json::json!({
            "asOf": "2024-05-10",
            "previews": [{
                "table": "rooms",
                "columns": ["room_number", "category"],
                "rows": [{"room_number": 101, "category": "single"}],
            }],
            "reports": [{
                "report": "busy-rooms",
                "title": "Busy rooms as of 2024-05-10",
                "columns": ["busy_rooms"],
                "rows": [],
            }],
        })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
