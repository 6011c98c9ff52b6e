//! Driver-facing value representation and connection capabilities.
//!
//! The conversion layer never owns a connection. The two operations that
//! materialize driver-native objects borrow a capability handle passed in
//! by the caller; everything the driver needs is staged as [`DriverValue`]
//! first. The same representation is used for cells of driver-returned
//! arrays.

use bigdecimal::BigDecimal;
use bytes::Bytes;
use thiserror::Error;

/// A value in the shape the SQL driver consumes or returns.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// SQL NULL.
    Null,
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// Decimal value. Driver-returned numeric cells use this
    /// representation regardless of the column's declared scale.
    Decimal(BigDecimal),
    /// String value.
    String(String),
    /// A contiguous byte block.
    Bytes(Bytes),
    /// An array payload.
    Seq(Vec<DriverValue>),
    /// An attribute-ordered nested object payload.
    Map(Vec<(String, DriverValue)>),
}

impl DriverValue {
    /// Runtime kind of the value, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Int(_) => "int",
            DriverValue::Float(_) => "float",
            DriverValue::Boolean(_) => "boolean",
            DriverValue::Decimal(_) => "decimal",
            DriverValue::String(_) => "string",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Seq(_) => "array",
            DriverValue::Map(_) => "record",
        }
    }

    /// Try to get the value as an array payload.
    pub fn as_seq(&self) -> Option<&[DriverValue]> {
        match self {
            DriverValue::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DriverValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Fault raised by a driver capability call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// The driver could not map an attribute value to the SQL type's
    /// attribute.
    #[error("attribute type mismatch: {message}")]
    TypeMismatch { message: String },

    /// Error reported by the database.
    #[error("ORA-{code:05}: {message}")]
    Database { code: u32, message: String },
}

impl DriverError {
    /// Create a type mismatch fault.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }

    /// Create a database fault.
    pub fn database(code: u32, message: impl Into<String>) -> Self {
        Self::Database {
            code,
            message: message.into(),
        }
    }
}

/// Connection capability to create a named object type (STRUCT) instance.
///
/// Implemented by the connector's connection handle; tests substitute a
/// fake.
pub trait CreateStruct {
    /// Driver-native struct handle.
    type Struct;

    /// Create a struct of the named SQL object type from attribute values
    /// in attribute order.
    fn create_struct(
        &mut self,
        type_name: &str,
        attributes: &[DriverValue],
    ) -> Result<Self::Struct, DriverError>;
}

/// Connection capability to create a named VARRAY instance.
pub trait CreateArray {
    /// Driver-native array handle.
    type Array;

    /// Create an array of the named SQL array type from element values.
    fn create_array(
        &mut self,
        type_name: &str,
        elements: &[DriverValue],
    ) -> Result<Self::Array, DriverError>;
}
