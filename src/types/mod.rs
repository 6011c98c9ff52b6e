//! Host value types for Oracle custom type conversion.

mod interval;
mod typed_array;
mod value;

pub use interval::{IntervalDayToSecond, IntervalYearToMonth};
pub use typed_array::{ArrayKind, TypedArray};
pub use value::{ArrayValue, Field, Record, TypeKind, Value};
