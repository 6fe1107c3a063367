// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use hotel_reports::{GenerateReportsError, ReadRelationError, SchemaMismatchError, SourceRelation};
use hotel_reports_cli::{CLIError, EXIT_CODE_FAILURE, EXIT_CODE_USAGE_ERROR};
use internal_error::{InternalError, ResultIntoInternal};
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_usage_error() {
    let err = CLIError::usage_error("Limit must be greater than zero");

    assert_eq!(err.exit_code(), EXIT_CODE_USAGE_ERROR);
    assert_eq!(
        err.pretty(false).to_string(),
        "Usage error: Limit must be greater than zero"
    );
}

#[test]
fn test_usage_error_from_source_is_not_repeated() {
    let err = CLIError::usage_error_from(std::io::Error::other("bad value"));

    assert_eq!(err.pretty(false).to_string(), "Usage error: bad value");
}

#[test]
fn test_schema_mismatch_failure() {
    let err: CLIError = GenerateReportsError::ReadRelation(ReadRelationError::SchemaMismatch(
        SchemaMismatchError::missing_column(SourceRelation::Orders, "price"),
    ))
    .into();

    assert_eq!(err.exit_code(), EXIT_CODE_FAILURE);
    assert_eq!(
        err.pretty(false).to_string(),
        "Error: Table 'orders' is missing required column 'price'"
    );
}

#[test]
fn test_internal_error_shows_causes() {
    let res: Result<(), InternalError> =
        Err(std::io::Error::other("disk on fire")).context_int_err("Collecting report");

    let err: CLIError = GenerateReportsError::Internal(res.unwrap_err()).into();

    assert_eq!(err.exit_code(), EXIT_CODE_FAILURE);
    assert_eq!(
        err.pretty(false).to_string(),
        "Error: Internal error\n  Caused by: Collecting report\n  Caused by: disk on fire"
    );
}
