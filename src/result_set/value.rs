//! Cell values and the conversions that pull them into entity fields.

use thiserror::Error;

pub use serde_json::Value;

/// A cell held a value of the wrong shape for the target field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("expected {expected}, found {actual}")]
pub struct CellError {
    pub expected: &'static str,
    pub actual: &'static str,
}

impl CellError {
    fn new(expected: &'static str, value: &Value) -> Self {
        CellError {
            expected,
            actual: value_kind(value),
        }
    }
}

/// Human-readable kind of a cell value, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Conversion from a driver cell into a concrete field type.
///
/// Implementations never coerce lossily: a string cell does not become a
/// number and an out-of-range integer is rejected rather than truncated.
pub trait FromCell: Sized {
    fn from_cell(value: &Value) -> Result<Self, CellError>;
}

impl FromCell for i64 {
    fn from_cell(value: &Value) -> Result<Self, CellError> {
        value.as_i64().ok_or_else(|| CellError::new("i64", value))
    }
}

impl FromCell for i32 {
    fn from_cell(value: &Value) -> Result<Self, CellError> {
        value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| CellError::new("i32", value))
    }
}

impl FromCell for u64 {
    fn from_cell(value: &Value) -> Result<Self, CellError> {
        value.as_u64().ok_or_else(|| CellError::new("u64", value))
    }
}

impl FromCell for u32 {
    fn from_cell(value: &Value) -> Result<Self, CellError> {
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| CellError::new("u32", value))
    }
}

impl FromCell for f64 {
    fn from_cell(value: &Value) -> Result<Self, CellError> {
        value.as_f64().ok_or_else(|| CellError::new("f64", value))
    }
}

impl FromCell for bool {
    fn from_cell(value: &Value) -> Result<Self, CellError> {
        value.as_bool().ok_or_else(|| CellError::new("bool", value))
    }
}

impl FromCell for String {
    fn from_cell(value: &Value) -> Result<Self, CellError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| CellError::new("string", value))
    }
}

/// `Null` maps to `None`; anything else converts through the inner type.
impl<T: FromCell> FromCell for Option<T> {
    fn from_cell(value: &Value) -> Result<Self, CellError> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_cell(value).map(Some)
    }
}

/// Pass-through for fields that keep the raw cell.
impl FromCell for Value {
    fn from_cell(value: &Value) -> Result<Self, CellError> {
        Ok(value.clone())
    }
}
