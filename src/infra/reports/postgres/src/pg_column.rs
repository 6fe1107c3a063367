// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use datafusion::arrow::array::{
    ArrayRef,
    BooleanArray,
    Date32Array,
    Decimal128Array,
    Float32Array,
    Float64Array,
    Int16Array,
    Int32Array,
    Int64Array,
    StringArray,
    TimestampMicrosecondArray,
};
use datafusion::arrow::datatypes::{DataType, Date32Type, Field, TimeUnit};
use internal_error::{InternalError, ResultIntoInternal};
use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::postgres::PgRow;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Used for `numeric` columns declared without precision
pub const UNCONSTRAINED_NUMERIC_PRECISION: u8 = 38;
pub const UNCONSTRAINED_NUMERIC_SCALE: i8 = 10;

const MAX_DECIMAL128_PRECISION: u8 = 38;
const UTC: &str = "UTC";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Row of `information_schema.columns`
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PgColumnInfo {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: String,
    pub numeric_precision: Option<i32>,
    pub numeric_scale: Option<i32>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PgColumnType {
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Numeric { precision: u8, scale: i8 },
    Boolean,
    Date,
    Timestamp,
    TimestampTz,
    /// Any other type, read through a `::text` cast
    Text,
}

impl PgColumnType {
    pub fn from_information_schema(
        data_type: &str,
        numeric_precision: Option<i32>,
        numeric_scale: Option<i32>,
    ) -> Self {
        match data_type {
            "smallint" => Self::Int16,
            "integer" => Self::Int32,
            "bigint" => Self::Int64,
            "real" => Self::Float32,
            "double precision" => Self::Float64,
            "numeric" => match numeric_precision {
                None => Self::Numeric {
                    precision: UNCONSTRAINED_NUMERIC_PRECISION,
                    scale: UNCONSTRAINED_NUMERIC_SCALE,
                },
                Some(precision) => {
                    let precision = u8::try_from(precision.clamp(1, i32::from(MAX_DECIMAL128_PRECISION)))
                        .unwrap_or(MAX_DECIMAL128_PRECISION);
                    let scale = i8::try_from(numeric_scale.unwrap_or(0).clamp(0, i32::from(precision)))
                        .unwrap_or(0);
                    Self::Numeric { precision, scale }
                }
            },
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "timestamp without time zone" => Self::Timestamp,
            "timestamp with time zone" => Self::TimestampTz,
            _ => Self::Text,
        }
    }

    pub fn arrow_type(&self) -> DataType {
        match self {
            Self::Int16 => DataType::Int16,
            Self::Int32 => DataType::Int32,
            Self::Int64 => DataType::Int64,
            Self::Float32 => DataType::Float32,
            Self::Float64 => DataType::Float64,
            Self::Numeric { precision, scale } => DataType::Decimal128(*precision, *scale),
            Self::Boolean => DataType::Boolean,
            Self::Date => DataType::Date32,
            Self::Timestamp => DataType::Timestamp(TimeUnit::Microsecond, None),
            Self::TimestampTz => DataType::Timestamp(TimeUnit::Microsecond, Some(UTC.into())),
            Self::Text => DataType::Utf8,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgColumn {
    pub name: String,
    pub column_type: PgColumnType,
    pub nullable: bool,
}

impl From<PgColumnInfo> for PgColumn {
    fn from(value: PgColumnInfo) -> Self {
        Self {
            column_type: PgColumnType::from_information_schema(
                &value.data_type,
                value.numeric_precision,
                value.numeric_scale,
            ),
            nullable: value.is_nullable == "YES",
            name: value.column_name,
        }
    }
}

impl PgColumn {
    pub fn arrow_field(&self) -> Field {
        Field::new(&self.name, self.column_type.arrow_type(), self.nullable)
    }

    /// Expression used in the select list
    pub fn select_expr(&self) -> String {
        let ident = quote_ident(&self.name);
        match self.column_type {
            PgColumnType::Text => format!("{ident}::text AS {ident}"),
            _ => ident,
        }
    }

    /// Converts the column at `index` of fetched rows into an Arrow array
    pub fn to_array(&self, rows: &[PgRow], index: usize) -> Result<ArrayRef, InternalError> {
        let array: ArrayRef = match self.column_type {
            PgColumnType::Int16 => Arc::new(Int16Array::from(decode::<i16>(rows, index)?)),
            PgColumnType::Int32 => Arc::new(Int32Array::from(decode::<i32>(rows, index)?)),
            PgColumnType::Int64 => Arc::new(Int64Array::from(decode::<i64>(rows, index)?)),
            PgColumnType::Float32 => Arc::new(Float32Array::from(decode::<f32>(rows, index)?)),
            PgColumnType::Float64 => Arc::new(Float64Array::from(decode::<f64>(rows, index)?)),
            PgColumnType::Numeric { precision, scale } => {
                let values = decode::<Decimal>(rows, index)?
                    .into_iter()
                    .map(|v| v.map(|v| decimal_to_i128(v, scale)).transpose())
                    .collect::<Result<Vec<_>, _>>()?;
                Arc::new(
                    Decimal128Array::from(values)
                        .with_precision_and_scale(precision, scale)
                        .int_err()?,
                )
            }
            PgColumnType::Boolean => Arc::new(BooleanArray::from(decode::<bool>(rows, index)?)),
            PgColumnType::Date => Arc::new(Date32Array::from(
                decode::<NaiveDate>(rows, index)?
                    .into_iter()
                    .map(|v| v.map(Date32Type::from_naive_date))
                    .collect::<Vec<_>>(),
            )),
            PgColumnType::Timestamp => Arc::new(TimestampMicrosecondArray::from(
                decode::<NaiveDateTime>(rows, index)?
                    .into_iter()
                    .map(|v| v.map(|v| v.and_utc().timestamp_micros()))
                    .collect::<Vec<_>>(),
            )),
            PgColumnType::TimestampTz => Arc::new(
                TimestampMicrosecondArray::from(
                    decode::<DateTime<Utc>>(rows, index)?
                        .into_iter()
                        .map(|v| v.map(|v| v.timestamp_micros()))
                        .collect::<Vec<_>>(),
                )
                .with_timezone(UTC),
            ),
            PgColumnType::Text => Arc::new(StringArray::from(decode::<String>(rows, index)?)),
        };

        Ok(array)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

pub fn select_statement(schema: &str, table: &str, columns: &[PgColumn]) -> String {
    let select_list = columns
        .iter()
        .map(PgColumn::select_expr)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "SELECT {select_list} FROM {}.{}",
        quote_ident(schema),
        quote_ident(table)
    )
}

fn decode<T>(rows: &[PgRow], index: usize) -> Result<Vec<Option<T>>, InternalError>
where
    T: for<'r> sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    rows.iter()
        .map(|row| row.try_get::<Option<T>, _>(index))
        .collect::<Result<Vec<_>, _>>()
        .int_err()
}

/// Mantissa of the value rescaled to the column scale. Values with more
/// fractional digits than the scale allows are rejected rather than rounded.
pub fn decimal_to_i128(value: Decimal, scale: i8) -> Result<i128, InternalError> {
    let scale = u32::try_from(scale).int_err()?;

    let mut rescaled = value;
    rescaled.rescale(scale);
    if rescaled.scale() != scale || rescaled != value {
        return InternalError::bail(format!(
            "Numeric value {value} cannot be represented with scale {scale} without losing \
             precision"
        ));
    }

    Ok(rescaled.mantissa())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
