// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const DEFAULT_LOGGING_CONFIG: &str = "warn";
const INFO_LOGGING_CONFIG: &str = "info";
const VERBOSE_LOGGING_CONFIG: &str = "debug";

pub const LOG_FORMAT_ENV_VAR: &str = "HOTEL_REPORTS_LOG_FORMAT";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV_VAR).as_deref() {
            Ok("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Chooses the filter directive: `RUST_LOG` wins, otherwise it is derived from
/// the number of `-v` flags
pub fn env_filter(verbosity_level: u8) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_directive(verbosity_level)),
    }
}

pub fn default_directive(verbosity_level: u8) -> &'static str {
    match verbosity_level {
        0 => DEFAULT_LOGGING_CONFIG,
        1 => INFO_LOGGING_CONFIG,
        _ => VERBOSE_LOGGING_CONFIG,
    }
}

/// Sets up a global subscriber that writes to STDERR, keeping STDOUT free for
/// the command output
pub fn cli(verbosity_level: u8, format: LogFormat) {
    // Logging may be already initialized when running under tests
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let env_filter = env_filter(verbosity_level);

    let span_events = if verbosity_level > 1 {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_span_events(span_events)
        .with_writer(std::io::stderr);

    let res = match format {
        LogFormat::Text if verbosity_level > 1 => builder.pretty().try_init(),
        LogFormat::Text => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(err) = res {
        eprintln!("Failed to initialize logging: {err}");
        return;
    }

    // Redirect all standard logging to tracing events
    let _ = tracing_log::LogTracer::init();
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
