// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod engine_config;
mod generate_reports_use_case_impl;
mod report_service_impl;
mod session_context_builder;

pub use engine_config::*;
pub use generate_reports_use_case_impl::*;
pub use report_service_impl::*;
pub use session_context_builder::*;
