// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use database_common::{
    DatabaseEnvPasswordProvider,
    DatabasePasswordProvider,
    DatabaseProvider,
    PostgresConnectionPool,
};
use dill::*;
use hotel_reports::DEFAULT_PREVIEW_LIMIT;
use hotel_reports_datafusion::*;
use hotel_reports_postgres::PostgresRelationReader;
use internal_error::ResultIntoInternal;
use observability::init::LogFormat;
use time_source::{SystemTimeSource, SystemTimeSourceDefault, SystemTimeSourceStub};

use crate::config::{CLIConfig, ConfigService};
use crate::error::*;
use crate::output::*;
use crate::{cli, cli_commands};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BINARY_NAME: &str = "hotel-reports";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn run(args: cli::Cli) -> Result<(), CLIError> {
    let output_config = configure_output_format(&args);

    observability::init::cli(output_config.verbosity_level, LogFormat::from_env());
    observability::panic_handler::set_hook_trace_panics(true);

    tracing::info!(
        version = VERSION,
        args = ?std::env::args().collect::<Vec<_>>(),
        "Initializing {BINARY_NAME}"
    );

    let result = run_command(args, output_config.clone()).await;

    match &result {
        Ok(()) => {
            tracing::info!("Command successful");
        }
        Err(err) => {
            tracing::error!(
                error_dbg = ?err,
                error = %err.pretty(true),
                "Command failed",
            );

            // With verbose logging the error is already on STDERR
            if output_config.verbosity_level == 0 {
                eprintln!("{}", err.pretty(false));
            }
        }
    }

    result
}

async fn run_command(args: cli::Cli, output_config: OutputConfig) -> Result<(), CLIError> {
    let work_dir = std::env::current_dir().int_err()?;
    let config = ConfigService::new(args.config.clone(), work_dir).load()?;

    let preview_limit = config
        .preview
        .as_ref()
        .and_then(|p| p.limit)
        .unwrap_or(DEFAULT_PREVIEW_LIMIT);
    if preview_limit == 0 {
        return Err(CLIError::usage_error(
            "Config value preview.limit must be greater than zero",
        ));
    }

    let mut catalog_builder = configure_base_catalog(args.system_time);
    register_config_in_catalog(&config, &mut catalog_builder);
    configure_database_components(&mut catalog_builder, &config);
    catalog_builder.add_value(output_config);

    let catalog = catalog_builder.build();

    let command = cli_commands::get_command(args, preview_limit)?.get(&catalog)?;
    command.run().await
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Catalog
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Registers the report pipelines. The relation reader is provided separately.
pub fn configure_base_catalog(system_time: Option<DateTime<Utc>>) -> CatalogBuilder {
    let mut b = CatalogBuilder::new();

    if let Some(system_time) = system_time {
        b.add_value(SystemTimeSourceStub::new_set(system_time))
            .bind::<dyn SystemTimeSource, SystemTimeSourceStub>();
    } else {
        b.add::<SystemTimeSourceDefault>();
    }

    b.add::<SessionContextBuilder>();
    b.add::<ReportServiceImpl>();
    b.add::<GenerateReportsUseCaseImpl>();

    b
}

pub fn register_config_in_catalog(config: &CLIConfig, catalog_builder: &mut CatalogBuilder) {
    catalog_builder.add_value(
        config
            .engine
            .clone()
            .unwrap_or_default()
            .to_engine_config(),
    );
}

pub fn configure_database_components(
    catalog_builder: &mut CatalogBuilder,
    config: &CLIConfig,
) {
    let database_config = config.database.clone().unwrap_or_default();
    let db_configuration = database_config.to_db_configuration();

    tracing::debug!(
        connection = %db_configuration.display_connection_string(),
        schema = %db_configuration.schema,
        "Configuring database components"
    );

    match db_configuration.provider {
        DatabaseProvider::Postgres => {
            catalog_builder
                .add_value(DatabaseEnvPasswordProvider::new(
                    database_config.password_env_var(),
                ))
                .bind::<dyn DatabasePasswordProvider, DatabaseEnvPasswordProvider>();
            catalog_builder.add_value(db_configuration);
            catalog_builder.add::<PostgresConnectionPool>();
            catalog_builder.add::<PostgresRelationReader>();
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Output format
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn configure_output_format(args: &cli::Cli) -> OutputConfig {
    let is_tty = console::Term::stdout().features().is_attended();

    OutputConfig::new(args.quiet, args.verbose, is_tty, args.output_format)
}
