// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use clap::Parser;
use dill::{Catalog, TypedBuilder};
use hotel_reports_cli::cli::Cli;
use hotel_reports_cli::config::CLIConfig;
use hotel_reports_cli::{self, OutputConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn cli_catalog() -> Catalog {
    let config = CLIConfig::sample();

    let mut b = hotel_reports_cli::configure_base_catalog(None);
    hotel_reports_cli::register_config_in_catalog(&config, &mut b);
    hotel_reports_cli::configure_database_components(&mut b, &config);
    b.add_value(OutputConfig::default());
    b.build()
}

#[test_log::test(tokio::test)]
async fn test_di_cli_graph_validates() {
    let config = CLIConfig::sample();

    let mut b = hotel_reports_cli::configure_base_catalog(None);
    hotel_reports_cli::register_config_in_catalog(&config, &mut b);
    hotel_reports_cli::configure_database_components(&mut b, &config);
    b.add_value(OutputConfig::default());

    let validate_result = b.validate();

    assert!(
        validate_result.is_ok(),
        "{}",
        validate_result.err().unwrap()
    );
}

#[test_log::test(tokio::test)]
async fn test_di_all_commands_resolve() {
    let catalog = cli_catalog();

    for args in [
        vec!["hotel-reports"],
        vec!["hotel-reports", "run", "--as-of", "2024-05-10"],
        vec!["hotel-reports", "preview", "--limit", "3"],
        vec!["hotel-reports", "room-revenue"],
        vec!["hotel-reports", "client-activity"],
        vec!["hotel-reports", "busy-rooms"],
        vec!["hotel-reports", "completions", "bash"],
    ] {
        let cli = Cli::try_parse_from(&args).unwrap();
        let builder = hotel_reports_cli::get_command(cli, 20).unwrap();

        let res = builder.get(&catalog);
        assert!(res.is_ok(), "{args:?}: {}", res.err().unwrap());
    }
}
