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
use hotel_reports::{GenerateReportsUseCase, ReportKind, ReportOutput, ReportsRequest};

use super::{CLIError, Command, ReportsPrinter};
use crate::output::OutputConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Prints a single report without the source previews
#[dill::component]
#[dill::interface(dyn Command)]
pub struct ReportCommand {
    generate_reports_use_case: Arc<dyn GenerateReportsUseCase>,
    output_config: Arc<OutputConfig>,

    #[dill::component(explicit)]
    kind: ReportKind,

    #[dill::component(explicit)]
    as_of: Option<NaiveDate>,
}

#[async_trait::async_trait(?Send)]
impl Command for ReportCommand {
    async fn run(&self) -> Result<(), CLIError> {
        let request = ReportsRequest::single_report(self.kind).with_as_of(self.as_of);

        let response = self.generate_reports_use_case.execute(request).await?;

        tracing::info!(
            kind = %self.kind,
            as_of = %response.as_of,
            num_rows = response.reports.iter().map(ReportOutput::num_rows).sum::<usize>(),
            "Report generated"
        );

        ReportsPrinter::new(&self.output_config).print_response(&response)
    }
}
