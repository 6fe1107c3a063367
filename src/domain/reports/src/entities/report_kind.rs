// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub mod room_revenue {
    pub const ROOM_NUMBER: &str = "room_number";
    pub const PRICE_SUM: &str = "price_sum";
    pub const ORDERS_COUNT: &str = "orders_count";
}

pub mod client_activity {
    pub const PASSPORT: &str = "passport";
    pub const LAST_ARRIVED: &str = "last_arrived";
    pub const PAYED_SUM: &str = "payed_sum";
    pub const ORDERS_COUNT: &str = "orders_count";
}

pub mod busy_rooms {
    pub const BUSY_ROOMS: &str = "busy_rooms";
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reports in the order they are presented
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
)]
#[strum(serialize_all = "kebab-case")]
pub enum ReportKind {
    RoomRevenue,
    ClientActivity,
    BusyRooms,
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::RoomRevenue => "Orders stats",
            ReportKind::ClientActivity => "Client stats",
            ReportKind::BusyRooms => "Busy rooms",
        }
    }

    pub fn output_columns(&self) -> &'static [&'static str] {
        match self {
            ReportKind::RoomRevenue => &[
                room_revenue::ROOM_NUMBER,
                room_revenue::PRICE_SUM,
                room_revenue::ORDERS_COUNT,
            ],
            ReportKind::ClientActivity => &[
                client_activity::PASSPORT,
                client_activity::LAST_ARRIVED,
                client_activity::PAYED_SUM,
                client_activity::ORDERS_COUNT,
            ],
            ReportKind::BusyRooms => &[busy_rooms::BUSY_ROOMS],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
