// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod common;
mod completions_command;
mod preview_command;
mod report_command;
mod run_command;

pub use common::*;
pub use completions_command::*;
pub use preview_command::*;
pub use report_command::*;
pub use run_command::*;

pub use crate::error::CLIError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait(?Send)]
pub trait Command: Send + Sync {
    async fn run(&self) -> Result<(), CLIError>;
}
