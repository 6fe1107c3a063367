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
use datafusion::arrow::array::{
    ArrayRef,
    Date32Array,
    Decimal128Array,
    Int32Array,
    RecordBatch,
    StringArray,
};
use datafusion::arrow::datatypes::{DataType, Date32Type, Field, Schema, SchemaRef};
use hotel_reports::SourceRelation;

use crate::InMemoryRelationReader;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const PRICE_PRECISION: u8 = 10;
pub const PRICE_SCALE: i8 = 2;

/// `(order_id, room_number, client_passport, price_cents, arrival, departure)`
pub type OrderRow<'a> = (i32, i32, &'a str, i128, &'a str, &'a str);

/// Same as [`OrderRow`] but with the nullable columns left optional
pub type NullableOrderRow<'a> = (i32, i32, Option<&'a str>, Option<i128>, &'a str, &'a str);

/// `(passport, full_name)`
pub type ClientRow<'a> = (&'a str, &'a str);

/// `(room_number, category)`
pub type RoomRow<'a> = (i32, &'a str);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn orders_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("order_id", DataType::Int32, false),
        Field::new("room_number", DataType::Int32, false),
        Field::new("client_passport", DataType::Utf8, true),
        Field::new(
            "price",
            DataType::Decimal128(PRICE_PRECISION, PRICE_SCALE),
            true,
        ),
        Field::new("arrival_date", DataType::Date32, false),
        Field::new("departure_date", DataType::Date32, false),
    ]))
}

pub fn clients_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("passport", DataType::Utf8, false),
        Field::new("full_name", DataType::Utf8, true),
    ]))
}

pub fn rooms_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("room_number", DataType::Int32, false),
        Field::new("category", DataType::Utf8, true),
    ]))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn date32(s: &str) -> i32 {
    Date32Type::from_naive_date(date(s))
}

pub fn orders_batch(rows: &[OrderRow<'_>]) -> RecordBatch {
    let rows: Vec<NullableOrderRow<'_>> = rows
        .iter()
        .map(|r| (r.0, r.1, Some(r.2), Some(r.3), r.4, r.5))
        .collect();

    nullable_orders_batch(&rows)
}

pub fn nullable_orders_batch(rows: &[NullableOrderRow<'_>]) -> RecordBatch {
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from_iter_values(rows.iter().map(|r| r.0))),
        Arc::new(Int32Array::from_iter_values(rows.iter().map(|r| r.1))),
        Arc::new(StringArray::from_iter(rows.iter().map(|r| r.2))),
        Arc::new(
            Decimal128Array::from_iter(rows.iter().map(|r| r.3))
                .with_precision_and_scale(PRICE_PRECISION, PRICE_SCALE)
                .unwrap(),
        ),
        Arc::new(Date32Array::from_iter_values(rows.iter().map(|r| date32(r.4)))),
        Arc::new(Date32Array::from_iter_values(rows.iter().map(|r| date32(r.5)))),
    ];

    RecordBatch::try_new(orders_schema(), columns).unwrap()
}

pub fn clients_batch(rows: &[ClientRow<'_>]) -> RecordBatch {
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.0))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.1))),
    ];

    RecordBatch::try_new(clients_schema(), columns).unwrap()
}

pub fn rooms_batch(rows: &[RoomRow<'_>]) -> RecordBatch {
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from_iter_values(rows.iter().map(|r| r.0))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.1))),
    ];

    RecordBatch::try_new(rooms_schema(), columns).unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reader populated with the three relations built from plain rows
pub fn reader_from_rows(
    orders: &[OrderRow<'_>],
    clients: &[ClientRow<'_>],
    rooms: &[RoomRow<'_>],
) -> InMemoryRelationReader {
    InMemoryRelationReader::new()
        .with_relation(
            SourceRelation::Orders,
            orders_schema(),
            vec![orders_batch(orders)],
        )
        .with_relation(
            SourceRelation::Clients,
            clients_schema(),
            vec![clients_batch(clients)],
        )
        .with_relation(
            SourceRelation::Rooms,
            rooms_schema(),
            vec![rooms_batch(rooms)],
        )
}

/// A small hotel: three rooms, four clients and a handful of stays around
/// the middle of May 2024
pub fn sample_hotel_reader() -> InMemoryRelationReader {
    reader_from_rows(
        &[
            (1, 101, "AB123456", 10000, "2024-05-01", "2024-05-05"),
            (2, 101, "CD654321", 5000, "2024-05-10", "2024-05-12"),
            (3, 102, "AB123456", 20000, "2024-05-11", "2024-05-15"),
            (4, 103, "EF000001", 7550, "2024-05-09", "2024-05-10"),
            (5, 104, "ZZ999999", 3000, "2024-05-10", "2024-05-20"),
        ],
        &[
            ("AB123456", "Ivan Petrov"),
            ("CD654321", "Anna Sidorova"),
            ("EF000001", "Oleg Ivanov"),
            ("GH111111", "Maria Smirnova"),
        ],
        &[(101, "single"), (102, "double"), (103, "suite")],
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
