// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::str::FromStr;

use hotel_reports::*;
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_canonical_order() {
    let mut kinds = vec![
        ReportKind::BusyRooms,
        ReportKind::RoomRevenue,
        ReportKind::ClientActivity,
    ];
    kinds.sort();

    assert_eq!(kinds, ReportKind::iter().collect::<Vec<_>>());
}

#[test]
fn test_names_and_titles() {
    assert_eq!(
        ReportKind::iter()
            .map(|k| (k.to_string(), k.title()))
            .collect::<Vec<_>>(),
        vec![
            ("room-revenue".to_string(), "Orders stats"),
            ("client-activity".to_string(), "Client stats"),
            ("busy-rooms".to_string(), "Busy rooms"),
        ]
    );
    assert_eq!(
        ReportKind::from_str("busy-rooms").unwrap(),
        ReportKind::BusyRooms
    );
}

#[test]
fn test_full_request() {
    let request = ReportsRequest::full();

    assert_eq!(
        request.previews,
        vec![SourceRelation::Orders, SourceRelation::Clients]
    );
    assert_eq!(request.preview_limit, 20);
    assert_eq!(request.reports.len(), 3);
    assert_eq!(request.as_of, None);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
