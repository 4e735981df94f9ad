use std::fmt;

use bitpack::errors::SchemaError;

use crate::transform::TransformError;

/// Errors building a codec from a schema and its transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    Schema(SchemaError),
    Transform {
        field: String,
        error: TransformError,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Schema(e) => write!(f, "schema: {e}"),
            CodecError::Transform { field, error } => {
                write!(f, "transform for field `{field}`: {error}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Schema(e) => Some(e),
            CodecError::Transform { error, .. } => Some(error),
        }
    }
}

impl From<SchemaError> for CodecError {
    fn from(value: SchemaError) -> Self {
        CodecError::Schema(value)
    }
}
