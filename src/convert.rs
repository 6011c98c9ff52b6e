//! Conversions between host values and Oracle driver shapes.
//!
//! Custom Oracle types arrive from the host as records: interval spans,
//! object types and VARRAYs. Records are decomposed into driver-ready
//! payloads ([`record_to_sql`]); object and VARRAY construction then
//! delegates to the connection capabilities in [`crate::driver`].
//! The reverse path ([`typed_array_from_cells`]) turns raw driver array
//! cells back into typed host arrays.
//!
//! All functions are pure except the two that take a connection
//! capability. A failed conversion returns no partial result.

use crate::driver::{CreateArray, CreateStruct, DriverError, DriverValue};
use crate::error::{Error, Result};
use crate::types::{ArrayKind, ArrayValue, TypeKind, TypedArray, Value};
use bigdecimal::{BigDecimal, ToPrimitive};
use bytes::Bytes;

/// SQL type labels used in error messages.
const INTERVAL_YEAR_TO_MONTH: &str = "INTERVAL YEAR TO MONTH";
const INTERVAL_DAY_TO_SECOND: &str = "INTERVAL DAY TO SECOND";
const OBJECT_TYPE: &str = "OBJECT TYPE";
const VARRAY: &str = "VARRAY";

// Field names of the custom type records.
const YEARS: &str = "years";
const MONTHS: &str = "months";
const DAYS: &str = "days";
const HOURS: &str = "hours";
const MINUTES: &str = "minutes";
const SECONDS: &str = "seconds";
const TYPE_NAME: &str = "typeName";
const ATTRIBUTES: &str = "attributes";
const NAME: &str = "name";
const ELEMENTS: &str = "elements";

/// Render an INTERVAL YEAR TO MONTH record to Oracle interval literal
/// syntax: `"<years>-<months>"`.
///
/// The input must be a record with `years` and `months` fields, each
/// holding a string, int, float or decimal. Values are rendered as-is,
/// with no padding or sign normalization.
pub fn interval_year_to_month(value: &Value) -> Result<String> {
    let fields = record_to_sql(value, INTERVAL_YEAR_TO_MONTH)?;
    let years = interval_field(&fields, YEARS, INTERVAL_YEAR_TO_MONTH)?;
    let months = interval_field(&fields, MONTHS, INTERVAL_YEAR_TO_MONTH)?;
    Ok(format!("{}-{}", years, months))
}

/// Render an INTERVAL DAY TO SECOND record to Oracle interval literal
/// syntax: `"<days> <hours>:<minutes>:<seconds>"`.
pub fn interval_day_to_second(value: &Value) -> Result<String> {
    let fields = record_to_sql(value, INTERVAL_DAY_TO_SECOND)?;
    let days = interval_field(&fields, DAYS, INTERVAL_DAY_TO_SECOND)?;
    let hours = interval_field(&fields, HOURS, INTERVAL_DAY_TO_SECOND)?;
    let minutes = interval_field(&fields, MINUTES, INTERVAL_DAY_TO_SECOND)?;
    let seconds = interval_field(&fields, SECONDS, INTERVAL_DAY_TO_SECOND)?;
    Ok(format!("{} {}:{}:{}", days, hours, minutes, seconds))
}

/// Build a driver-native object type (STRUCT) instance.
///
/// The input must be a record with a `typeName` string field and an
/// `attributes` array field. The type name is upper-cased before the
/// driver call (Oracle object type names are case-normalized). A driver
/// type mismatch among the attributes surfaces as
/// [`Error::UnmappableType`]; any other driver fault is propagated as
/// [`Error::Driver`].
pub fn oracle_object<C: CreateStruct>(conn: &mut C, value: &Value) -> Result<C::Struct> {
    let fields = record_to_sql(value, OBJECT_TYPE)?;
    let type_name = string_field(&fields, TYPE_NAME, OBJECT_TYPE)?.to_uppercase();
    let attributes = seq_field(&fields, ATTRIBUTES, OBJECT_TYPE)?;
    tracing::trace!(
        type_name = %type_name,
        attribute_count = attributes.len(),
        "creating object type struct"
    );
    conn.create_struct(&type_name, attributes).map_err(|e| match e {
        DriverError::TypeMismatch { .. } => Error::UnmappableType,
        e => Error::Driver(e),
    })
}

/// Build a driver-native VARRAY instance.
///
/// The input must be a record with a `name` string field and an
/// `elements` array field. The type name is upper-cased before the
/// driver call. Driver faults are propagated as [`Error::Driver`].
pub fn varray<C: CreateArray>(conn: &mut C, value: &Value) -> Result<C::Array> {
    let fields = record_to_sql(value, VARRAY)?;
    let name = string_field(&fields, NAME, VARRAY)?.to_uppercase();
    let elements = seq_field(&fields, ELEMENTS, VARRAY)?;
    tracing::trace!(
        type_name = %name,
        element_count = elements.len(),
        "creating varray"
    );
    conn.create_array(&name, elements).map_err(Error::Driver)
}

/// Convert raw driver array cells into a typed host array.
///
/// The cell representation must match `kind`: numeric kinds (int, float,
/// decimal, boolean) expect decimal cells, `string` expects string cells
/// and `byte` expects a single nested byte block. A mismatched cell fails
/// with [`Error::ArrayTypeCast`]. An empty input succeeds with an empty
/// typed array; the representation check never runs.
pub fn typed_array_from_cells(kind: ArrayKind, cells: &[DriverValue]) -> Result<TypedArray> {
    match kind {
        ArrayKind::String => {
            let mut items = Vec::with_capacity(cells.len());
            for cell in cells {
                match cell {
                    DriverValue::String(s) => items.push(s.clone()),
                    _ => return Err(Error::array_type_cast(kind)),
                }
            }
            Ok(TypedArray::String(items))
        }
        ArrayKind::Int => {
            let mut items = Vec::with_capacity(cells.len());
            for cell in cells {
                match cell {
                    DriverValue::Decimal(d) => {
                        items.push(d.to_i64().ok_or_else(|| Error::array_type_cast(kind))?)
                    }
                    _ => return Err(Error::array_type_cast(kind)),
                }
            }
            Ok(TypedArray::Int(items))
        }
        ArrayKind::Float => {
            let mut items = Vec::with_capacity(cells.len());
            for cell in cells {
                match cell {
                    DriverValue::Decimal(d) => {
                        items.push(d.to_f64().ok_or_else(|| Error::array_type_cast(kind))?)
                    }
                    _ => return Err(Error::array_type_cast(kind)),
                }
            }
            Ok(TypedArray::Float(items))
        }
        ArrayKind::Decimal => {
            let mut items = Vec::with_capacity(cells.len());
            for cell in cells {
                match cell {
                    DriverValue::Decimal(d) => items.push(d.clone()),
                    _ => return Err(Error::array_type_cast(kind)),
                }
            }
            Ok(TypedArray::Decimal(items))
        }
        ArrayKind::Boolean => {
            // The driver returns NUMBER cells; 1 means true, anything
            // else false.
            let one = BigDecimal::from(1);
            let mut items = Vec::with_capacity(cells.len());
            for cell in cells {
                match cell {
                    DriverValue::Decimal(d) => items.push(*d == one),
                    _ => return Err(Error::array_type_cast(kind)),
                }
            }
            Ok(TypedArray::Boolean(items))
        }
        ArrayKind::Byte => match cells.first() {
            None => Ok(TypedArray::Byte(Bytes::new())),
            Some(DriverValue::Bytes(block)) => Ok(TypedArray::Byte(block.clone())),
            Some(_) => Err(Error::array_type_cast(kind)),
        },
    }
}

/// Decompose a record into an attribute-ordered list of driver-ready
/// payloads, keyed by field name.
///
/// Walks the declared fields in order and dispatches on each field's
/// declared kind: scalars copy through, arrays lower to array payloads,
/// nested records recurse, and optional fields admit null, array or
/// string values. Any other declared kind fails with
/// [`Error::InvalidParameterType`].
pub fn record_to_sql(value: &Value, sql_type: &str) -> Result<Vec<(String, DriverValue)>> {
    let record = match value {
        Value::Record(r) => r,
        other => return Err(Error::invalid_parameter(other.kind_name(), sql_type)),
    };
    let mut fields = Vec::with_capacity(record.fields.len());
    for field in &record.fields {
        let payload = match field.kind {
            TypeKind::Int
            | TypeKind::Float
            | TypeKind::String
            | TypeKind::Boolean
            | TypeKind::Decimal => scalar_cell(&field.value, field.kind)
                .ok_or_else(|| Error::invalid_parameter(field.value.kind_name(), sql_type))?,
            TypeKind::Array => match &field.value {
                Value::Array(array) => array_payload(array, sql_type)?,
                other => return Err(Error::invalid_parameter(other.kind_name(), sql_type)),
            },
            TypeKind::Record => DriverValue::Map(record_to_sql(&field.value, sql_type)?),
            TypeKind::Optional => match &field.value {
                Value::Null => DriverValue::Null,
                Value::Array(array) => array_payload(array, sql_type)?,
                Value::String(s) => DriverValue::String(s.clone()),
                other => return Err(Error::invalid_parameter(other.kind_name(), sql_type)),
            },
            _ => return Err(Error::invalid_parameter(field.kind.name(), sql_type)),
        };
        fields.push((field.name.clone(), payload));
    }
    Ok(fields)
}

/// Lower an array value to a driver-ready payload, dispatching on the
/// declared element kind.
///
/// Byte arrays are packed into a single nested block; scalar kinds
/// produce a homogeneous payload; the open `anydata` kind produces a
/// heterogeneous payload that may nest further arrays. Mutually
/// recursive with [`record_to_sql`] through array-typed record fields.
fn array_payload(array: &ArrayValue, sql_type: &str) -> Result<DriverValue> {
    match array.elem_kind {
        TypeKind::Byte => {
            let mut block = Vec::with_capacity(array.items.len());
            for item in &array.items {
                match item {
                    Value::Int(n) if (0..=255).contains(n) => block.push(*n as u8),
                    other => {
                        return Err(Error::invalid_parameter(other.kind_name(), sql_type))
                    }
                }
            }
            // The driver expects the whole array as one nested block.
            Ok(DriverValue::Seq(vec![DriverValue::Bytes(Bytes::from(
                block,
            ))]))
        }
        TypeKind::Int
        | TypeKind::Float
        | TypeKind::Boolean
        | TypeKind::Decimal
        | TypeKind::String => {
            let mut cells = Vec::with_capacity(array.items.len());
            for item in &array.items {
                let cell = scalar_cell(item, array.elem_kind)
                    .ok_or_else(|| Error::invalid_parameter(item.kind_name(), sql_type))?;
                cells.push(cell);
            }
            Ok(DriverValue::Seq(cells))
        }
        TypeKind::Any => any_payload(&array.items),
        _ => Err(Error::invalid_parameter(array.elem_kind.name(), sql_type)),
    }
}

/// Lower an `anydata` array to a heterogeneous payload.
///
/// Null, ints, floats, decimals and strings map directly; nested arrays
/// recurse regardless of their declared element kind. Booleans and
/// records have no driver mapping here.
fn any_payload(items: &[Value]) -> Result<DriverValue> {
    let mut cells = Vec::with_capacity(items.len());
    for item in items {
        let cell = match item {
            Value::Null => DriverValue::Null,
            Value::Int(n) => DriverValue::Int(*n),
            Value::Float(x) => DriverValue::Float(*x),
            Value::Decimal(d) => DriverValue::Decimal(d.clone()),
            Value::String(s) => DriverValue::String(s.clone()),
            Value::Array(array) => any_payload(&array.items)?,
            _ => return Err(Error::UnmappableType),
        };
        cells.push(cell);
    }
    Ok(DriverValue::Seq(cells))
}

/// Copy a scalar value through if its runtime tag matches the declared
/// kind.
fn scalar_cell(value: &Value, kind: TypeKind) -> Option<DriverValue> {
    match (kind, value) {
        (TypeKind::Int, Value::Int(n)) => Some(DriverValue::Int(*n)),
        (TypeKind::Float, Value::Float(x)) => Some(DriverValue::Float(*x)),
        (TypeKind::Boolean, Value::Boolean(b)) => Some(DriverValue::Boolean(*b)),
        (TypeKind::Decimal, Value::Decimal(d)) => Some(DriverValue::Decimal(d.clone())),
        (TypeKind::String, Value::String(s)) => Some(DriverValue::String(s.clone())),
        _ => None,
    }
}

/// Render a decomposed interval field to its literal form.
fn interval_field(
    fields: &[(String, DriverValue)],
    name: &str,
    sql_type: &str,
) -> Result<String> {
    let value = fields.iter().find(|(n, _)| n == name).map(|(_, v)| v);
    match value {
        Some(DriverValue::String(s)) => Ok(s.clone()),
        Some(DriverValue::Int(n)) => Ok(n.to_string()),
        Some(DriverValue::Float(x)) => Ok(x.to_string()),
        // Decimals render through their floating-point form.
        Some(DriverValue::Decimal(d)) => Ok(d.to_f64().unwrap_or(f64::NAN).to_string()),
        other => Err(Error::invalid_parameter(
            other.map(DriverValue::kind_name).unwrap_or("null"),
            sql_type,
        )),
    }
}

/// Look up a decomposed string field.
fn string_field<'a>(
    fields: &'a [(String, DriverValue)],
    name: &str,
    sql_type: &str,
) -> Result<&'a str> {
    let value = fields.iter().find(|(n, _)| n == name).map(|(_, v)| v);
    match value {
        Some(DriverValue::String(s)) => Ok(s),
        other => Err(Error::invalid_parameter(
            other.map(DriverValue::kind_name).unwrap_or("null"),
            sql_type,
        )),
    }
}

/// Look up a decomposed array payload field.
fn seq_field<'a>(
    fields: &'a [(String, DriverValue)],
    name: &str,
    sql_type: &str,
) -> Result<&'a [DriverValue]> {
    let value = fields.iter().find(|(n, _)| n == name).map(|(_, v)| v);
    match value {
        Some(DriverValue::Seq(items)) => Ok(items),
        other => Err(Error::invalid_parameter(
            other.map(DriverValue::kind_name).unwrap_or("null"),
            sql_type,
        )),
    }
}
