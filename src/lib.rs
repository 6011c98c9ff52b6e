//! Oracle custom type conversion for Rust SQL connectors.
//!
//! Converts a host runtime's boxed structured values (records, arrays,
//! optional unions) into the shapes an Oracle driver consumes — object
//! type (STRUCT) handles, VARRAY handles and interval literal strings —
//! and converts raw driver-returned arrays back into typed host arrays.
//!
//! The crate owns no connections: the two operations that materialize
//! driver-native objects borrow a connection handle through the narrow
//! [`CreateStruct`] and [`CreateArray`] capabilities.
//!
//! # Example
//!
//! ```
//! use oracle_types_rs::convert;
//! use oracle_types_rs::{Field, Record, TypeKind, Value};
//!
//! let interval = Value::Record(Record::new(vec![
//!     Field::new("years", TypeKind::Int, Value::Int(2)),
//!     Field::new("months", TypeKind::Int, Value::Int(3)),
//! ]));
//! assert_eq!(convert::interval_year_to_month(&interval).unwrap(), "2-3");
//! ```

pub mod convert;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod types;

// Re-export main types
pub use diagnostics::{DiagnosticCode, Severity};
pub use driver::{CreateArray, CreateStruct, DriverError, DriverValue};
pub use error::{Error, Result};
pub use types::{
    ArrayKind, ArrayValue, Field, IntervalDayToSecond, IntervalYearToMonth, Record, TypeKind,
    TypedArray, Value,
};
