//! Error types for schema compilation and encoding.

use std::fmt;

/// Errors produced when compiling [crate::field::Field]s into a [crate::schema::Schema].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Field width is 0 or greater than 64 bits.
    InvalidFieldSize { name: String, width: usize },
    /// Two fields share the same name.
    DuplicateFieldName(String),
    /// Field name is empty.
    InvalidFieldName,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::InvalidFieldSize { name, width } => {
                write!(f, "field `{name}` has invalid width {width} (expected 1..=64)")
            }
            SchemaError::DuplicateFieldName(name) => write!(f, "duplicate field name `{name}`"),
            SchemaError::InvalidFieldName => f.write_str("field name must not be empty"),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Errors produced by [crate::schema::Schema::encode] and [crate::schema::Schema::encode_strict].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// No value was supplied for a declared field.
    MissingField(String),
    /// Value does not fit its field. Only reported by strict encoding.
    ValueOutOfRange(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::MissingField(name) => write!(f, "missing value for field `{name}`"),
            EncodeError::ValueOutOfRange(name) => {
                write!(f, "value for field `{name}` does not fit its width")
            }
        }
    }
}

impl std::error::Error for EncodeError {}
