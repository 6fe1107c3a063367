// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::Display;

use dill::InjectionError;
use hotel_reports::{GenerateReportsError, ReadRelationError};
use internal_error::{BoxedError, InternalError};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const EXIT_CODE_FAILURE: i32 = 1;
pub const EXIT_CODE_USAGE_ERROR: i32 = 2;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum CLIError {
    #[error("{msg}")]
    UsageError {
        msg: String,
        #[source]
        source: Option<BoxedError>,
    },
    #[error(transparent)]
    Failure(BoxedError),
}

impl CLIError {
    pub fn usage_error(msg: impl Into<String>) -> Self {
        Self::UsageError {
            msg: msg.into(),
            source: None,
        }
    }

    pub fn usage_error_from(e: impl Into<BoxedError>) -> Self {
        let source = e.into();
        Self::UsageError {
            msg: source.to_string(),
            source: Some(source),
        }
    }

    pub fn failure(e: impl Into<BoxedError>) -> Self {
        Self::Failure(e.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UsageError { .. } => EXIT_CODE_USAGE_ERROR,
            Self::Failure(_) => EXIT_CODE_FAILURE,
        }
    }

    /// Renders the error with its chain of causes
    pub fn pretty(&self, include_backtraces: bool) -> impl Display + '_ {
        PrettyCLIError {
            error: self,
            include_backtraces,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<InternalError> for CLIError {
    fn from(e: InternalError) -> Self {
        Self::failure(e)
    }
}

impl From<InjectionError> for CLIError {
    fn from(e: InjectionError) -> Self {
        Self::failure(e)
    }
}

impl From<std::io::Error> for CLIError {
    fn from(e: std::io::Error) -> Self {
        Self::failure(e)
    }
}

impl From<GenerateReportsError> for CLIError {
    fn from(e: GenerateReportsError) -> Self {
        match e {
            GenerateReportsError::ReadRelation(ReadRelationError::Internal(e))
            | GenerateReportsError::Internal(e) => Self::failure(e),
            GenerateReportsError::ReadRelation(e) => Self::failure(e),
            GenerateReportsError::Report(e) => Self::failure(e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct PrettyCLIError<'a> {
    error: &'a CLIError,
    include_backtraces: bool,
}

impl Display for PrettyCLIError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = match self.error {
            CLIError::UsageError { .. } => "Usage error",
            CLIError::Failure(_) => "Error",
        };
        write!(f, "{}: {}", console::style(title).for_stderr().red().bold(), self.error)?;

        let (mut source, mut backtrace) = match self.error {
            CLIError::UsageError { source, .. } => (
                source
                    .as_deref()
                    .map(|e| e as &(dyn std::error::Error + 'static)),
                None,
            ),
            CLIError::Failure(e) => (
                e.source(),
                e.downcast_ref::<InternalError>()
                    .map(InternalError::backtrace),
            ),
        };

        let mut prev_message = self.error.to_string();
        while let Some(e) = source {
            let message = e.to_string();
            // Transparent wrappers repeat the message of their source
            if message != prev_message {
                write!(f, "\n  Caused by: {message}")?;
            }
            if backtrace.is_none() {
                backtrace = e.downcast_ref::<InternalError>().map(InternalError::backtrace);
            }
            prev_message = message;
            source = e.source();
        }

        if self.include_backtraces {
            if let Some(backtrace) = backtrace {
                if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
                    write!(f, "\n\nBacktrace:\n{backtrace}")?;
                }
            }
        }

        Ok(())
    }
}
