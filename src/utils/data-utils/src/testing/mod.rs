// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use arrow::array::RecordBatch;
use pretty_assertions::assert_eq;

use crate::data::DataFrameExt;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn assert_dfs_equal(lhs: DataFrameExt, rhs: DataFrameExt) {
    pretty_assertions::assert_eq!(lhs.schema(), rhs.schema());

    let lhs_batches = lhs.collect().await.unwrap();
    let rhs_batches = rhs.collect().await.unwrap();

    let lhs_count: usize = lhs_batches.iter().map(RecordBatch::num_rows).sum();
    let rhs_count: usize = rhs_batches.iter().map(RecordBatch::num_rows).sum();

    // Collect may return an empty vec or a vec with an empty batch
    if lhs_count == 0 && rhs_count == 0 {
        return;
    }

    assert_eq!(format_batches(&lhs_batches), format_batches(&rhs_batches));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn assert_data_eq(df: DataFrameExt, expected: &str) {
    let batches = df.collect().await.unwrap();
    assert_batches_eq(&batches, expected);
}

pub fn assert_batches_eq(batches: &[RecordBatch], expected: &str) {
    let actual = format_batches(batches);
    assert_eq!(expected.trim(), actual.trim());
}

pub fn assert_schema_columns_eq(df: &DataFrameExt, expected: &[&str]) {
    let actual = df.column_names();
    assert_eq!(expected, actual.iter().map(String::as_str).collect::<Vec<_>>());
}

pub fn format_batches(batches: &[RecordBatch]) -> String {
    arrow::util::pretty::pretty_format_batches(batches)
        .unwrap()
        .to_string()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
