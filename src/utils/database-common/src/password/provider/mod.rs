// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod db_env_password_provider;
mod db_fixed_password_provider;
mod db_password_provider;

pub use db_env_password_provider::*;
pub use db_fixed_password_provider::*;
pub use db_password_provider::*;
