//! Integration tests for Oracle custom type conversion against a fake
//! connection.

mod common;

use common::FakeConnection;
use oracle_types_rs::convert;
use oracle_types_rs::{
    ArrayValue, DriverError, DriverValue, Error, Field, IntervalDayToSecond, IntervalYearToMonth,
    Record, TypeKind, Value,
};

fn object_type_record(type_name: &str, attributes: Vec<Value>) -> Value {
    Value::Record(Record::new(vec![
        Field::new("typeName", TypeKind::String, Value::from(type_name)),
        Field::new(
            "attributes",
            TypeKind::Array,
            Value::Array(ArrayValue::new(TypeKind::Any, attributes)),
        ),
    ]))
}

fn varray_record(name: &str, elem_kind: TypeKind, elements: Vec<Value>) -> Value {
    Value::Record(Record::new(vec![
        Field::new("name", TypeKind::String, Value::from(name)),
        Field::new(
            "elements",
            TypeKind::Array,
            Value::Array(ArrayValue::new(elem_kind, elements)),
        ),
    ]))
}

#[test]
fn test_object_type_round_trip() {
    let mut conn = FakeConnection::new();
    let value = object_type_record("person", vec![Value::Int(1), Value::from("Bob")]);

    let handle = convert::oracle_object(&mut conn, &value).unwrap();

    // Type name upper-cased, attribute order preserved.
    assert_eq!(handle.type_name, "PERSON");
    assert_eq!(
        handle.attributes,
        vec![DriverValue::Int(1), DriverValue::String("Bob".to_string())]
    );
}

#[test]
fn test_object_type_nested_array_attribute() {
    let mut conn = FakeConnection::new();
    let nested = Value::Array(ArrayValue::new(
        TypeKind::Any,
        vec![Value::Int(2), Value::Null],
    ));
    let value = object_type_record("bag", vec![Value::from("x"), nested]);

    let handle = convert::oracle_object(&mut conn, &value).unwrap();

    assert_eq!(handle.type_name, "BAG");
    assert_eq!(
        handle.attributes,
        vec![
            DriverValue::String("x".to_string()),
            DriverValue::Seq(vec![DriverValue::Int(2), DriverValue::Null]),
        ]
    );
}

#[test]
fn test_object_type_requires_record() {
    let mut conn = FakeConnection::new();
    let result = convert::oracle_object(&mut conn, &Value::from("person"));
    assert!(matches!(result, Err(Error::InvalidParameterType { .. })));
}

#[test]
fn test_object_type_requires_type_name() {
    let mut conn = FakeConnection::new();
    let value = Value::Record(Record::new(vec![Field::new(
        "attributes",
        TypeKind::Array,
        Value::Array(ArrayValue::new(TypeKind::Any, vec![])),
    )]));
    let result = convert::oracle_object(&mut conn, &value);
    assert!(matches!(result, Err(Error::InvalidParameterType { .. })));
}

#[test]
fn test_object_type_mismatch_becomes_unmappable() {
    let mut conn =
        FakeConnection::failing_with(DriverError::type_mismatch("no mapping for attribute 2"));
    let value = object_type_record("person", vec![Value::Int(1)]);

    let result = convert::oracle_object(&mut conn, &value);
    assert!(matches!(result, Err(Error::UnmappableType)));
}

#[test]
fn test_object_type_database_fault_propagates() {
    let mut conn = FakeConnection::failing_with(DriverError::database(2303, "cannot use type"));
    let value = object_type_record("person", vec![Value::Int(1)]);

    let result = convert::oracle_object(&mut conn, &value);
    match result {
        Err(Error::Driver(DriverError::Database { code, message })) => {
            assert_eq!(code, 2303);
            assert_eq!(message, "cannot use type");
        }
        _ => panic!("Expected Driver error"),
    }
}

#[test]
fn test_varray_round_trip() {
    let mut conn = FakeConnection::new();
    let value = varray_record(
        "number_list",
        TypeKind::Int,
        vec![Value::Int(1), Value::Int(2), Value::Int(3)],
    );

    let handle = convert::varray(&mut conn, &value).unwrap();

    assert_eq!(handle.type_name, "NUMBER_LIST");
    assert_eq!(
        handle.elements,
        vec![
            DriverValue::Int(1),
            DriverValue::Int(2),
            DriverValue::Int(3)
        ]
    );
}

#[test]
fn test_varray_byte_elements_pack_into_block() {
    let mut conn = FakeConnection::new();
    let value = varray_record(
        "raw_list",
        TypeKind::Byte,
        vec![Value::Int(0), Value::Int(128), Value::Int(255)],
    );

    let handle = convert::varray(&mut conn, &value).unwrap();

    assert_eq!(handle.elements.len(), 1);
    match &handle.elements[0] {
        DriverValue::Bytes(block) => assert_eq!(&block[..], &[0, 128, 255]),
        other => panic!("Expected a byte block, got {:?}", other),
    }
}

#[test]
fn test_varray_requires_name() {
    let mut conn = FakeConnection::new();
    let value = Value::Record(Record::new(vec![Field::new(
        "elements",
        TypeKind::Array,
        Value::Array(ArrayValue::new(TypeKind::Int, vec![])),
    )]));
    let result = convert::varray(&mut conn, &value);
    assert!(matches!(result, Err(Error::InvalidParameterType { .. })));
}

#[test]
fn test_varray_database_fault_propagates() {
    let mut conn = FakeConnection::failing_with(DriverError::database(22715, "invalid varray"));
    let value = varray_record("number_list", TypeKind::Int, vec![Value::Int(1)]);

    let result = convert::varray(&mut conn, &value);
    assert!(matches!(
        result,
        Err(Error::Driver(DriverError::Database { code: 22715, .. }))
    ));
}

#[test]
fn test_interval_types_render_through_record_path() {
    let ym: Value = IntervalYearToMonth::new(2, 3).into();
    assert_eq!(convert::interval_year_to_month(&ym).unwrap(), "2-3");

    let ds: Value = IntervalDayToSecond::new(11, 10, 9, 8).into();
    assert_eq!(convert::interval_day_to_second(&ds).unwrap(), "11 10:9:8");
}

#[test]
fn test_interval_rendering_matches_display() {
    let ym = IntervalYearToMonth::new(7, 0);
    let lowered: Value = ym.into();
    assert_eq!(
        convert::interval_year_to_month(&lowered).unwrap(),
        ym.to_string()
    );
}
