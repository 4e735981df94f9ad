//! JSON-deserializable schema description.
//!
//! These types describe a schema the way it is usually written down as data:
//! an ordered list of `{ "name", "bits", "type" }` entries, where `type` is
//! `"uint"` or `"int"`. Compile with `Schema::try_from(def)`.
//!
//! An entry may also carry a `precision` scale factor for real-valued fields.
//! The integer codec ignores it; `bitpack-transform`'s scaled codec applies it.
//!
//! ```text
//! {
//!   "fields": [
//!     { "name": "effects", "bits": 12, "type": "uint" },
//!     { "name": "head_yaw", "bits": 6, "type": "int" },
//!     { "name": "lat", "bits": 32, "type": "int", "precision": 10000 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level schema definition. Field order is the packing order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SchemaDef {
    pub fields: Vec<FieldDef>,
}

/// Description of a single field.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FieldDef {
    /// Key used on encode and decode.
    pub name: String,
    /// Width in bits.
    pub bits: usize,
    #[serde(rename = "type")]
    pub kind: FieldTypeDef,
    /// Fixed-point scale: a real value `v` is stored as `round(v * precision)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
}

/// Integer interpretation of a field.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldTypeDef {
    /// Unsigned, truncated to the field width.
    Uint,
    /// Two's-complement signed.
    Int,
}
