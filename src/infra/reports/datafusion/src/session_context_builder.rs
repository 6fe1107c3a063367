// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use datafusion::prelude::SessionContext;

use crate::EngineConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Creates a fresh session per run, nothing is shared between runs
#[dill::component(pub)]
pub struct SessionContextBuilder {
    engine_config: Arc<EngineConfig>,
}

impl SessionContextBuilder {
    pub fn session_context(&self) -> SessionContext {
        let cfg = self.engine_config.session_config();

        tracing::debug!(
            target_partitions = cfg.target_partitions(),
            batch_size = cfg.batch_size(),
            "Creating session context"
        );

        SessionContext::new_with_config(cfg)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
