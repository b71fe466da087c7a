//! Values a script run hands back to its caller

use crate::core::types::ObjectId;
use serde::{Deserialize, Serialize};

/// Typed return value of a script run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ReturnValue {
    /// The script returned nothing
    #[default]
    Void,
    Int(i32),
    Float(f32),
    String(String),
    /// An object reference, `None` being the invalid object
    Object(Option<ObjectId>),
}

impl ReturnValue {
    /// Whether the run counts as a success for the event that fired it
    ///
    /// Numeric results are conditions: zero means the script declined.
    /// Every other result type counts as success.
    pub fn is_success(&self) -> bool {
        match self {
            ReturnValue::Int(i) => *i != 0,
            ReturnValue::Float(f) => *f != 0.0,
            ReturnValue::Void | ReturnValue::String(_) | ReturnValue::Object(_) => true,
        }
    }

    /// Short type name for log output
    pub fn type_name(&self) -> &'static str {
        match self {
            ReturnValue::Void => "void",
            ReturnValue::Int(_) => "int",
            ReturnValue::Float(_) => "float",
            ReturnValue::String(_) => "string",
            ReturnValue::Object(_) => "object",
        }
    }
}

impl From<i32> for ReturnValue {
    fn from(value: i32) -> Self {
        ReturnValue::Int(value)
    }
}

impl From<f32> for ReturnValue {
    fn from(value: f32) -> Self {
        ReturnValue::Float(value)
    }
}

impl From<bool> for ReturnValue {
    fn from(value: bool) -> Self {
        ReturnValue::Int(value as i32)
    }
}

impl From<String> for ReturnValue {
    fn from(value: String) -> Self {
        ReturnValue::String(value)
    }
}
