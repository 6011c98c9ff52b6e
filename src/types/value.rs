//! Host value model for Oracle custom type conversion.
//!
//! Values arriving from the host runtime are boxed and dynamically tagged.
//! This module re-expresses them as a closed tagged union so that all
//! conversion dispatch is a `match` over the tag.
//!
//! Note: a record field carries a *declared* kind next to its runtime
//! value. The declared kind can be broader than the value (`Optional`,
//! `Any`), which is why both are kept.

use bigdecimal::BigDecimal;
use std::fmt;

/// Declared kind tags of the host runtime's type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Float,
    /// String.
    String,
    /// Boolean.
    Boolean,
    /// Arbitrary-precision decimal.
    Decimal,
    /// Unsigned byte (only meaningful as an array element kind).
    Byte,
    /// Array of a declared element kind.
    Array,
    /// Record with declared fields.
    Record,
    /// Optional union (the value may be null).
    Optional,
    /// Open "any data" kind.
    Any,
    /// XML document.
    Xml,
}

impl TypeKind {
    /// Name of the kind as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TypeKind::Int => "int",
            TypeKind::Float => "float",
            TypeKind::String => "string",
            TypeKind::Boolean => "boolean",
            TypeKind::Decimal => "decimal",
            TypeKind::Byte => "byte",
            TypeKind::Array => "array",
            TypeKind::Record => "record",
            TypeKind::Optional => "optional",
            TypeKind::Any => "anydata",
            TypeKind::Xml => "xml",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A boxed host value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value.
    Null,
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// Arbitrary-precision decimal value.
    Decimal(BigDecimal),
    /// String value.
    String(String),
    /// Array value with a declared element kind.
    Array(ArrayValue),
    /// Record value with declared fields.
    Record(Record),
}

impl Value {
    /// Check if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Runtime kind of the value, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
        }
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to i64.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to convert to f64.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the value as a record.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Try to get the value as an array.
    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(a) => write!(f, "<{}[{}]>", a.elem_kind, a.items.len()),
            Value::Record(r) => write!(f, "<record[{}]>", r.fields.len()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<BigDecimal> for Value {
    fn from(d: BigDecimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// An array value with the declared kind of its elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue {
    /// Declared element kind.
    pub elem_kind: TypeKind,
    /// Element values.
    pub items: Vec<Value>,
}

impl ArrayValue {
    /// Create an array with the given declared element kind.
    pub fn new(elem_kind: TypeKind, items: Vec<Value>) -> Self {
        Self { elem_kind, items }
    }

    /// Create a byte array from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            elem_kind: TypeKind::Byte,
            items: bytes.iter().map(|b| Value::Int(*b as i64)).collect(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the array is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A record field: name, declared kind and runtime value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Declared kind of the field.
    pub kind: TypeKind,
    /// Runtime value of the field.
    pub value: Value,
}

impl Field {
    /// Create a field.
    pub fn new(name: impl Into<String>, kind: TypeKind, value: Value) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
        }
    }
}

/// A record value. Field order is the declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Fields in declared order.
    pub fields: Vec<Field>,
}

impl Record {
    /// Create a record from its fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
