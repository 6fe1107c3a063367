// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{Duration, Local, TimeZone, Utc};
use time_source::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_stub_frozen_and_reset() {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
    let stub = SystemTimeSourceStub::new_set(t0);

    pretty_assertions::assert_eq!(stub.now(), t0);
    pretty_assertions::assert_eq!(stub.now(), t0);

    let t1 = t0 + Duration::days(1);
    stub.set(t1);
    pretty_assertions::assert_eq!(stub.now(), t1);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_stub_today_uses_local_calendar() {
    let t = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
    let stub = SystemTimeSourceStub::new_set(t);

    pretty_assertions::assert_eq!(stub.today(), t.with_timezone(&Local).date_naive());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_unset_stub_follows_real_clock() {
    let stub = SystemTimeSourceStub::new();

    let before = Utc::now();
    let now = stub.now();
    assert!(now >= before);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
