// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use hotel_reports::*;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_table_names() {
    assert_eq!(SourceRelation::Orders.table_name(), "orders");
    assert_eq!(SourceRelation::Clients.table_name(), "clients");
    assert_eq!(SourceRelation::Rooms.table_name(), "rooms");
    assert_eq!(SourceRelation::Rooms.to_string(), "rooms");
}

#[test]
fn test_required_columns() {
    assert_eq!(
        SourceRelation::Orders.required_columns(),
        &[
            "order_id",
            "room_number",
            "client_passport",
            "price",
            "arrival_date",
            "departure_date"
        ]
    );
    assert_eq!(SourceRelation::Clients.required_columns(), &["passport"]);
    assert_eq!(SourceRelation::Rooms.required_columns(), &["room_number"]);
}

#[test]
fn test_schema_mismatch_display() {
    assert_eq!(
        SchemaMismatchError::missing_table(SourceRelation::Clients).to_string(),
        "Table 'clients' does not exist"
    );
    assert_eq!(
        SchemaMismatchError::missing_column(SourceRelation::Orders, "price").to_string(),
        "Table 'orders' is missing required column 'price'"
    );

    let err: Box<dyn std::error::Error> =
        Box::new(SchemaMismatchError::missing_column(SourceRelation::Rooms, "room_number"));
    assert_eq!(
        err.to_string(),
        "Table 'rooms' is missing required column 'room_number'"
    );
    assert!(err.source().is_none());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
