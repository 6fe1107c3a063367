// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use clap::CommandFactory as _;

use super::{CLIError, Command};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component]
#[dill::interface(dyn Command)]
pub struct CompletionsCommand {
    #[dill::component(explicit)]
    shell: clap_complete::Shell,
}

#[async_trait::async_trait(?Send)]
impl Command for CompletionsCommand {
    async fn run(&self) -> Result<(), CLIError> {
        let mut cli = crate::cli::Cli::command();
        let bin_name = cli.get_name().to_owned();
        clap_complete::generate(self.shell, &mut cli, bin_name, &mut std::io::stdout());
        Ok(())
    }
}
