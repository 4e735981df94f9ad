//! Definition of logical fields used to build a [crate::schema::Schema].

/// A single named field in a schema.
///
/// Fields carry no position of their own: offsets come from declaration order
/// when the schema is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Name used to look the value up on encode and as the key on decode.
    pub name: String,
    /// Number of bits reserved for the field, `1..=64`.
    pub width: usize,
    /// Whether the slot holds a plain unsigned value or a two's-complement one.
    pub kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, width: usize, kind: FieldKind) -> Self {
        Field {
            name: name.into(),
            width,
            kind,
        }
    }

    pub fn unsigned(name: impl Into<String>, width: usize) -> Self {
        Self::new(name, width, FieldKind::Unsigned)
    }

    pub fn signed(name: impl Into<String>, width: usize) -> Self {
        Self::new(name, width, FieldKind::Signed)
    }
}

/// Interpretation of a field's bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    Unsigned,
    /// Two's-complement within the field width.
    Signed,
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            name: value.name,
            width: value.bits,
            kind: value.kind.into(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldTypeDef> for FieldKind {
    fn from(value: crate::serde::FieldTypeDef) -> Self {
        match value {
            crate::serde::FieldTypeDef::Uint => FieldKind::Unsigned,
            crate::serde::FieldTypeDef::Int => FieldKind::Signed,
        }
    }
}
