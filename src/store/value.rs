//! Value types for the key-value store

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Represents the different types of values that can be stored
///
/// Every variant is serializable so the persistent backend can write the
/// whole store to its snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// String value (binary-safe)
    String(Bytes),

    /// Integer value
    Integer(i64),
}

impl Value {
    /// Create a string value
    pub fn string(bytes: impl Into<Bytes>) -> Self {
        Value::String(bytes.into())
    }

    /// Create an integer value
    pub fn integer(i: i64) -> Self {
        Value::Integer(i)
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
        }
    }

    /// Try to get as string bytes
    pub fn as_string(&self) -> Option<&Bytes> {
        match self {
            Value::String(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_accessors() {
        let value = Value::string("hello");
        assert_eq!(value.type_name(), "string");
        assert_eq!(value.as_string().unwrap(), &Bytes::from("hello"));
        assert_eq!(value.as_integer(), None);
    }

    #[test]
    fn test_integer_accessors() {
        let value = Value::integer(42);
        assert_eq!(value.type_name(), "integer");
        assert_eq!(value.as_integer(), Some(42));
        assert!(value.as_string().is_none());
    }

    #[test]
    fn test_binary_safe_string() {
        let value = Value::string(&b"\x00\xffraw"[..]);
        assert_eq!(value.as_string().unwrap().as_ref(), b"\x00\xffraw");
    }
}
