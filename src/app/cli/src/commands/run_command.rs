// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::NaiveDate;
use hotel_reports::{GenerateReportsUseCase, ReportsRequest};

use super::{CLIError, Command, ReportsPrinter};
use crate::output::OutputConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component]
#[dill::interface(dyn Command)]
pub struct RunCommand {
    generate_reports_use_case: Arc<dyn GenerateReportsUseCase>,
    output_config: Arc<OutputConfig>,

    #[dill::component(explicit)]
    as_of: Option<NaiveDate>,

    #[dill::component(explicit)]
    preview_limit: usize,
}

#[async_trait::async_trait(?Send)]
impl Command for RunCommand {
    async fn run(&self) -> Result<(), CLIError> {
        let request = ReportsRequest::full()
            .with_preview_limit(self.preview_limit)
            .with_as_of(self.as_of);

        let response = self.generate_reports_use_case.execute(request).await?;

        ReportsPrinter::new(&self.output_config).print_response(&response)
    }
}
