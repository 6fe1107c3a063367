// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod report_kind;
mod source_relation;
mod source_snapshot;

pub use report_kind::*;
pub use source_relation::*;
pub use source_snapshot::*;
