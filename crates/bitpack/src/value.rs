//! Field values passed to and returned from the codec.

use std::collections::{BTreeMap, HashMap};

/// A single field value. Unsigned fields decode to [Value::U64], signed ones to [Value::I64].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    U64(u64),
    I64(i64),
}

impl Value {
    /// Returns the value as `i64`, or `None` if a `U64` is above `i64::MAX`.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Value::I64(v) => Some(v),
            Value::U64(v) => i64::try_from(v).ok(),
        }
    }

    /// Returns the value as `u64`, or `None` if an `I64` is negative.
    pub fn as_u64(self) -> Option<u64> {
        match self {
            Value::U64(v) => Some(v),
            Value::I64(v) => u64::try_from(v).ok(),
        }
    }

    /// Widens the value to `i128` without loss.
    pub fn to_i128(self) -> i128 {
        match self {
            Value::U64(v) => v as i128,
            Value::I64(v) => v as i128,
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::U64(v as u64)
            }
        })*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::I64(v as i64)
            }
        })*
    };
}

impl_from_unsigned!(u8, u16, u32, u64);
impl_from_signed!(i8, i16, i32, i64);

/// Supplies field values to [crate::schema::Schema::encode] by name.
///
/// Implement this for a struct with named, typed fields to encode it without
/// building a map first.
pub trait FieldSource {
    fn field_value(&self, name: &str) -> Option<Value>;
}

/// Receives decoded field values from [crate::schema::Schema::decode_into].
pub trait FieldSink {
    fn set_field_value(&mut self, name: &str, value: Value);
}

impl FieldSource for BTreeMap<String, Value> {
    fn field_value(&self, name: &str) -> Option<Value> {
        self.get(name).copied()
    }
}

impl FieldSource for HashMap<String, Value> {
    fn field_value(&self, name: &str) -> Option<Value> {
        self.get(name).copied()
    }
}

impl FieldSink for BTreeMap<String, Value> {
    fn set_field_value(&mut self, name: &str, value: Value) {
        self.insert(name.to_string(), value);
    }
}

impl FieldSink for HashMap<String, Value> {
    fn set_field_value(&mut self, name: &str, value: Value) {
        self.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(7u8), Value::U64(7));
        assert_eq!(Value::from(-3i16), Value::I64(-3));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::U64(u64::MAX).as_i64(), None);
        assert_eq!(Value::I64(-1).as_u64(), None);
        assert_eq!(Value::I64(5).as_u64(), Some(5));
        assert_eq!(Value::U64(u64::MAX).to_i128(), u64::MAX as i128);
    }

    #[test]
    fn test_map_source_and_sink() {
        let mut map = BTreeMap::new();
        map.set_field_value("a", Value::U64(1));
        assert_eq!(map.field_value("a"), Some(Value::U64(1)));
        assert_eq!(map.field_value("b"), None);
    }
}
