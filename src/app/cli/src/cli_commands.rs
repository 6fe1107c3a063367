// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::*;
use hotel_reports::ReportKind;

use crate::cli;
use crate::commands::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Maps parsed arguments onto a command builder. Running without a subcommand
/// is the same as `run`.
pub fn get_command(
    args: cli::Cli,
    default_preview_limit: usize,
) -> Result<Box<dyn TypedBuilder<dyn Command>>, CLIError> {
    let command: Box<dyn TypedBuilder<dyn Command>> =
        match args.command.unwrap_or(cli::Command::Run(cli::Run::default())) {
            cli::Command::Run(c) => Box::new(
                RunCommand::builder(
                    c.as_of,
                    validate_limit(c.limit)?.unwrap_or(default_preview_limit),
                )
                .cast(),
            ),
            cli::Command::Preview(c) => Box::new(
                PreviewCommand::builder(validate_limit(c.limit)?.unwrap_or(default_preview_limit))
                    .cast(),
            ),
            cli::Command::RoomRevenue(_) => {
                Box::new(ReportCommand::builder(ReportKind::RoomRevenue, None).cast())
            }
            cli::Command::ClientActivity(_) => {
                Box::new(ReportCommand::builder(ReportKind::ClientActivity, None).cast())
            }
            cli::Command::BusyRooms(c) => {
                Box::new(ReportCommand::builder(ReportKind::BusyRooms, c.as_of).cast())
            }
            cli::Command::Completions(c) => Box::new(CompletionsCommand::builder(c.shell).cast()),
        };

    Ok(command)
}

fn validate_limit(limit: Option<usize>) -> Result<Option<usize>, CLIError> {
    match limit {
        Some(0) => Err(CLIError::usage_error("Limit must be greater than zero")),
        limit => Ok(limit),
    }
}
