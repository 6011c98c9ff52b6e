//! Shared fake connection for integration tests.

use oracle_types_rs::{CreateArray, CreateStruct, DriverError, DriverValue};

/// Stand-in for a driver-native struct handle, recording what the driver
/// received.
#[derive(Debug, Clone, PartialEq)]
pub struct StructHandle {
    pub type_name: String,
    pub attributes: Vec<DriverValue>,
}

/// Stand-in for a driver-native array handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayHandle {
    pub type_name: String,
    pub elements: Vec<DriverValue>,
}

/// Fake connection implementing the creation capabilities. Can be primed
/// to fail the next call with a given driver fault.
#[derive(Debug, Default)]
pub struct FakeConnection {
    pub fail_with: Option<DriverError>,
}

impl FakeConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(fault: DriverError) -> Self {
        Self {
            fail_with: Some(fault),
        }
    }
}

impl CreateStruct for FakeConnection {
    type Struct = StructHandle;

    fn create_struct(
        &mut self,
        type_name: &str,
        attributes: &[DriverValue],
    ) -> Result<StructHandle, DriverError> {
        if let Some(fault) = self.fail_with.take() {
            return Err(fault);
        }
        Ok(StructHandle {
            type_name: type_name.to_string(),
            attributes: attributes.to_vec(),
        })
    }
}

impl CreateArray for FakeConnection {
    type Array = ArrayHandle;

    fn create_array(
        &mut self,
        type_name: &str,
        elements: &[DriverValue],
    ) -> Result<ArrayHandle, DriverError> {
        if let Some(fault) = self.fail_with.take() {
            return Err(fault);
        }
        Ok(ArrayHandle {
            type_name: type_name.to_string(),
            elements: elements.to_vec(),
        })
    }
}
