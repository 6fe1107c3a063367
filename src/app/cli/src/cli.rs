// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Parser)]
#[command(name = crate::BINARY_NAME)]
#[command(version = crate::VERSION)]
#[command(about = "Revenue and occupancy reports over the hotel database")]
#[command(after_help = r#"
Reads the `orders`, `clients` and `rooms` tables once, then computes every
requested report over that snapshot.

To get help for individual commands use:
  hotel-reports <command> -h
"#)]
pub struct Cli {
    /// Sets the level of verbosity (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(long, env = "HOTEL_REPORTS_CONFIG", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Overrides system time clock with provided value
    #[arg(long, value_name = "T", value_parser = parse_system_time, global = true)]
    pub system_time: Option<DateTime<Utc>>,

    /// Format to display the results in
    #[arg(short = 'o', long, value_enum, value_name = "FMT", global = true)]
    pub output_format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Subcommand)]
pub enum Command {
    Run(Run),
    Preview(Preview),
    RoomRevenue(RoomRevenue),
    ClientActivity(ClientActivity),
    BusyRooms(BusyRooms),
    Completions(Completions),
}

/// Preview loaded data and print all reports
#[derive(Debug, Default, clap::Args)]
pub struct Run {
    /// Date to evaluate room occupancy at (defaults to today)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,

    /// Number of rows to show in source previews
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Print the first rows of the orders and clients tables
#[derive(Debug, clap::Args)]
pub struct Preview {
    /// Number of rows to show
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Print total revenue and number of orders per room
#[derive(Debug, clap::Args)]
pub struct RoomRevenue {}

/// Print payments and last arrival date per client
#[derive(Debug, clap::Args)]
pub struct ClientActivity {}

/// Print rooms occupied at the given date
#[derive(Debug, clap::Args)]
pub struct BusyRooms {
    /// Date to evaluate room occupancy at (defaults to today)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,
}

/// Generate tab-completion scripts for your shell
#[derive(Debug, clap::Args)]
#[command(after_help = r#"
The command outputs to STDOUT, allowing you to re-direct the output to the file
of your choosing. Where you place the file will depend on which shell and which
operating system you are using. Your particular configuration may also determine
where these scripts need to be placed.

Example for bash:
  hotel-reports completions bash >> ~/.bashrc
"#)]
pub struct Completions {
    pub shell: clap_complete::Shell,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn parse_system_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(Into::into)
        .map_err(|e| format!("Expected RFC3339 timestamp, e.g. `2024-05-10T12:00:00Z`: {e}"))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Expected date in form `YYYY-MM-DD`: {e}"))
}
