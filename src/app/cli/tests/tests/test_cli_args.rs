// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{NaiveDate, TimeZone, Utc};
use clap::{CommandFactory, Parser};
use hotel_reports_cli::OutputFormat;
use hotel_reports_cli::cli::{Cli, Command};
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand() {
    let cli = Cli::try_parse_from(["hotel-reports"]).unwrap();

    assert!(cli.command.is_none());
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert_eq!(cli.output_format, None);
}

#[test]
fn test_global_options() {
    let cli = Cli::try_parse_from([
        "hotel-reports",
        "-vv",
        "busy-rooms",
        "--system-time",
        "2024-05-10T12:00:00Z",
        "-o",
        "csv",
        "-q",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(cli.output_format, Some(OutputFormat::Csv));
    assert_eq!(
        cli.system_time,
        Some(Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap())
    );
    assert!(matches!(cli.command, Some(Command::BusyRooms(_))));
}

#[test]
fn test_run_args() {
    let cli =
        Cli::try_parse_from(["hotel-reports", "run", "--as-of", "2024-05-11", "--limit", "5"])
            .unwrap();

    let run = match cli.command {
        Some(Command::Run(run)) => run,
        other => panic!("Unexpected command: {other:?}"),
    };
    assert_eq!(run.as_of, NaiveDate::from_ymd_opt(2024, 5, 11));
    assert_eq!(run.limit, Some(5));
}

#[test]
fn test_busy_rooms_as_of() {
    let cli = Cli::try_parse_from(["hotel-reports", "busy-rooms", "--as-of", "2024-05-09"]).unwrap();

    let busy_rooms = match cli.command {
        Some(Command::BusyRooms(busy_rooms)) => busy_rooms,
        other => panic!("Unexpected command: {other:?}"),
    };
    assert_eq!(busy_rooms.as_of, NaiveDate::from_ymd_opt(2024, 5, 9));
}

#[test]
fn test_invalid_values_are_rejected() {
    for args in [
        vec!["hotel-reports", "run", "--as-of", "10.05.2024"],
        vec!["hotel-reports", "--system-time", "yesterday"],
        vec!["hotel-reports", "-o", "xml"],
        vec!["hotel-reports", "room-revenue", "--as-of", "2024-05-10"],
        vec!["hotel-reports", "preview", "--limit", "-1"],
    ] {
        let res = Cli::try_parse_from(&args);
        let err = res.unwrap_err();
        assert_eq!(err.exit_code(), 2, "{args:?}: {err}");
    }
}
