// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub mod orders {
    pub const ORDER_ID: &str = "order_id";
    pub const ROOM_NUMBER: &str = "room_number";
    pub const CLIENT_PASSPORT: &str = "client_passport";
    pub const PRICE: &str = "price";
    pub const ARRIVAL_DATE: &str = "arrival_date";
    pub const DEPARTURE_DATE: &str = "departure_date";
}

pub mod clients {
    pub const PASSPORT: &str = "passport";
}

pub mod rooms {
    pub const ROOM_NUMBER: &str = "room_number";
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Database tables the reports are computed from
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SourceRelation {
    Orders,
    Clients,
    Rooms,
}

impl SourceRelation {
    pub fn table_name(&self) -> &'static str {
        self.into()
    }

    /// Columns the reports rely on. Any other columns are loaded as-is.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            SourceRelation::Orders => &[
                orders::ORDER_ID,
                orders::ROOM_NUMBER,
                orders::CLIENT_PASSPORT,
                orders::PRICE,
                orders::ARRIVAL_DATE,
                orders::DEPARTURE_DATE,
            ],
            SourceRelation::Clients => &[clients::PASSPORT],
            SourceRelation::Rooms => &[rooms::ROOM_NUMBER],
        }
    }

    pub fn check_columns(&self, df: &data_utils::data::DataFrameExt) -> Result<(), SchemaMismatchError> {
        match df.missing_columns(self.required_columns()).first() {
            None => Ok(()),
            Some(column) => Err(SchemaMismatchError::missing_column(*self, *column)),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Table '{relation}' {}", mismatch_reason(.column.as_deref()))]
pub struct SchemaMismatchError {
    pub relation: SourceRelation,
    /// `None` when the table itself is absent
    pub column: Option<String>,
}

impl SchemaMismatchError {
    pub fn missing_table(relation: SourceRelation) -> Self {
        Self {
            relation,
            column: None,
        }
    }

    pub fn missing_column(relation: SourceRelation, column: impl Into<String>) -> Self {
        Self {
            relation,
            column: Some(column.into()),
        }
    }
}

fn mismatch_reason(column: Option<&str>) -> String {
    match column {
        None => "does not exist".to_string(),
        Some(column) => format!("is missing required column '{column}'"),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
