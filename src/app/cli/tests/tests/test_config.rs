// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use database_common::DatabaseProvider;
use hotel_reports_cli::config::*;
use hotel_reports_cli::{CLIError, EXIT_CODE_USAGE_ERROR};
use indoc::indoc;
use merge::Merge;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_parse_full_config() {
    let config = ConfigService::parse(indoc!(
        r#"
        database:
          provider: postgres
          host: db.example.com
          port: 6432
          databaseName: hotel
          user: reporter
          passwordEnvVar: HOTEL_DB_PASSWORD
          schema: reporting
          maxConnections: 8
          acquireTimeout: 5s
        engine:
          targetPartitions: 4
          batchSize: 1024
        preview:
          limit: 5
        "#
    ))
    .unwrap();

    let database = config.database.clone().unwrap();
    assert_eq!(database.password_env_var(), "HOTEL_DB_PASSWORD");

    let db_configuration = database.to_db_configuration();
    assert_eq!(db_configuration.provider, DatabaseProvider::Postgres);
    assert_eq!(db_configuration.host, "db.example.com");
    assert_eq!(db_configuration.port(), 6432);
    assert_eq!(db_configuration.database_name, "hotel");
    assert_eq!(db_configuration.user, "reporter");
    assert_eq!(db_configuration.schema, "reporting");
    assert_eq!(db_configuration.max_connections, 8);
    assert_eq!(db_configuration.acquire_timeout, Duration::from_secs(5));

    let engine_config = config.engine.unwrap().to_engine_config();
    assert_eq!(engine_config.target_partitions, Some(4));
    assert_eq!(engine_config.batch_size, Some(1024));

    assert_eq!(config.preview, Some(PreviewConfig { limit: Some(5) }));
}

#[test]
fn test_empty_config_is_valid() {
    assert_eq!(ConfigService::parse("").unwrap(), CLIConfig::new());
    assert_eq!(ConfigService::parse("\n  \n").unwrap(), CLIConfig::new());
}

#[test]
fn test_unknown_keys_are_rejected() {
    let res = ConfigService::parse(indoc!(
        r#"
        database:
          hostname: localhost
        "#
    ));
    assert!(res.is_err(), "{res:?}");

    let res = ConfigService::parse("reports: {}");
    assert!(res.is_err(), "{res:?}");
}

#[test]
fn test_partial_config_merges_with_defaults() {
    let mut config = ConfigService::parse(indoc!(
        r#"
        database:
          host: db.example.com
        preview:
          limit: 3
        "#
    ))
    .unwrap();
    config.merge(CLIConfig::sample());

    let database = config.database.unwrap();
    assert_eq!(database.host.as_deref(), Some("db.example.com"));
    assert_eq!(database.port, Some(5432));
    assert_eq!(database.user.as_deref(), Some("postgres"));
    assert_eq!(
        database.database_name.as_deref(),
        Some("database-design-and-support-lab")
    );
    assert_eq!(database.password_env_var.as_deref(), Some("DB_PASSWORD"));
    assert_eq!(database.schema.as_deref(), Some("public"));

    assert_eq!(config.engine, Some(EngineConfig::sample()));
    assert_eq!(config.preview, Some(PreviewConfig { limit: Some(3) }));
}

#[test]
fn test_defaults_convert_to_db_configuration() {
    let db_configuration = DatabaseConfig::default().to_db_configuration();

    assert_eq!(
        db_configuration.display_connection_string(),
        "postgres://postgres@localhost:5432/database-design-and-support-lab"
    );
    assert_eq!(db_configuration.schema, "public");
    assert_eq!(db_configuration.max_connections, 3);
    assert_eq!(db_configuration.acquire_timeout, Duration::from_secs(30));
    assert_eq!(DatabaseConfig::default().password_env_var(), "DB_PASSWORD");
}

#[test]
fn test_load_from_work_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join(CONFIG_FILENAME),
        "engine:\n  targetPartitions: 2\n",
    )
    .unwrap();

    let config = ConfigService::new(None, temp_dir.path()).load().unwrap();

    assert_eq!(
        config.engine,
        Some(EngineConfig {
            target_partitions: Some(2),
            batch_size: None,
        })
    );
    assert_eq!(config.database, Some(DatabaseConfig::sample()));
}

#[test]
fn test_load_without_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    let config_svc = ConfigService::new(None, temp_dir.path());

    assert_eq!(config_svc.config_path().unwrap(), None);
    assert_eq!(config_svc.load().unwrap(), CLIConfig::sample());
}

#[test]
fn test_explicit_path_wins_over_work_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join(CONFIG_FILENAME),
        "preview:\n  limit: 1\n",
    )
    .unwrap();
    let explicit = temp_dir.path().join("custom.yaml");
    std::fs::write(&explicit, "preview:\n  limit: 7\n").unwrap();

    let config = ConfigService::new(Some(explicit), temp_dir.path())
        .load()
        .unwrap();

    assert_eq!(config.preview, Some(PreviewConfig { limit: Some(7) }));
}

#[test]
fn test_missing_explicit_path_is_usage_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    let err = ConfigService::new(Some(temp_dir.path().join("nope.yaml")), temp_dir.path())
        .load()
        .unwrap_err();

    assert!(matches!(err, CLIError::UsageError { .. }), "{err:?}");
    assert_eq!(err.exit_code(), EXIT_CODE_USAGE_ERROR);
}

#[test]
fn test_invalid_config_is_usage_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("bad.yaml");
    std::fs::write(&path, "database: [1, 2]\n").unwrap();

    let err = ConfigService::load_from(&path).unwrap_err();

    assert!(matches!(err, CLIError::UsageError { .. }), "{err:?}");
    assert!(err.to_string().starts_with("Invalid config"), "{err}");
}
