// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DatabaseProvider {
    Postgres,
}

impl DatabaseProvider {
    pub fn default_port(&self) -> u16 {
        match self {
            DatabaseProvider::Postgres => 5432,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
