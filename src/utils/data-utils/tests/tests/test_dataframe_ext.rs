// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use data_utils::data::DataFrameExt;
use data_utils::testing::{assert_data_eq, assert_schema_columns_eq};
use datafusion::arrow::array::{Int32Array, RecordBatch, StringArray};
use datafusion::arrow::datatypes::{DataType, Field, Schema};
use datafusion::prelude::*;
use indoc::indoc;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn rooms_df() -> DataFrameExt {
    let schema = Arc::new(Schema::new(vec![
        Field::new("room_number", DataType::Int32, false),
        Field::new("kind", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int32Array::from(vec![102, 101, 103])),
            Arc::new(StringArray::from(vec![Some("suite"), Some("single"), None])),
        ],
    )
    .unwrap();

    let ctx = SessionContext::new();
    ctx.read_batch(batch).unwrap().into()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_missing_columns() {
    let df = rooms_df();

    assert_eq!(
        df.missing_columns(&["room_number", "floor", "kind", "price"]),
        vec!["floor", "price"]
    );
    assert!(df.missing_columns(&["room_number"]).is_empty());
    assert_schema_columns_eq(&df, &["room_number", "kind"]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_wrapper_preserves_semantics() {
    let df = rooms_df()
        .filter(col("room_number").gt(lit(101)))
        .unwrap()
        .sort(vec![col("room_number").sort(true, false)])
        .unwrap();

    assert_data_eq(
        df,
        indoc!(
            r#"
            +-------------+-------+
            | room_number | kind  |
            +-------------+-------+
            | 102         | suite |
            | 103         |       |
            +-------------+-------+
            "#
        ),
    )
    .await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_count_and_limit() {
    assert_eq!(rooms_df().count().await.unwrap(), 3);

    let df = rooms_df()
        .select_columns(&["room_number"])
        .unwrap()
        .sort(vec![col("room_number").sort(true, false)])
        .unwrap()
        .limit(0, Some(1))
        .unwrap();

    assert_data_eq(
        df,
        indoc!(
            r#"
            +-------------+
            | room_number |
            +-------------+
            | 101         |
            +-------------+
            "#
        ),
    )
    .await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
