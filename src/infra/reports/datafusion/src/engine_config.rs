// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datafusion::prelude::SessionConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Tuning knobs of the embedded engine. `None` keeps DataFusion defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub target_partitions: Option<usize>,
    pub batch_size: Option<usize>,
}

impl EngineConfig {
    pub fn session_config(&self) -> SessionConfig {
        let mut cfg = SessionConfig::new().with_information_schema(true);

        if let Some(target_partitions) = self.target_partitions {
            cfg = cfg.with_target_partitions(target_partitions);
        }
        if let Some(batch_size) = self.batch_size {
            cfg = cfg.with_batch_size(batch_size);
        }

        cfg
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
