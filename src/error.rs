//! Error types for Oracle custom type conversion.

use crate::driver::DriverError;
use crate::types::ArrayKind;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Oracle custom type conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// A value does not match the shape or kind required by the target
    /// Oracle type. Detected locally, before any driver call.
    #[error("invalid parameter: {kind} is passed as value for SQL type {sql_type}")]
    InvalidParameterType { kind: String, sql_type: String },

    /// The driver rejected an attribute while constructing a native object,
    /// or a value has no driver mapping at all.
    #[error("the value contains elements of unmappable types")]
    UnmappableType,

    /// A returned array's element representation does not match the array
    /// kind the caller expected.
    #[error("cannot cast the returned array elements to a {kind} array")]
    ArrayTypeCast { kind: ArrayKind },

    /// Any other fault raised by the underlying SQL driver, propagated
    /// unchanged.
    #[error("driver error: {0}")]
    Driver(#[from] DriverError),
}

impl Error {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(kind: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self::InvalidParameterType {
            kind: kind.into(),
            sql_type: sql_type.into(),
        }
    }

    /// Create an array type cast error.
    pub fn array_type_cast(kind: ArrayKind) -> Self {
        Self::ArrayTypeCast { kind }
    }
}
