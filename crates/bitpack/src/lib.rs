//! # bitpack
//!
//! A schema-driven fixed-width bitfield codec.
//!
//! Declare an ordered list of named integer fields, each with a bit width and
//! signedness. Compiling the list assigns every field a contiguous bit range,
//! starting at bit 0 in declaration order. The compiled [schema::Schema] packs a
//! set of field values into one wide integer ([packed::Packed]) and unpacks it
//! again.
//!
//! [schema::Schema::encode] never range-checks: a value that does not fit its field is
//! truncated to the field width (unsigned) or wrapped (signed two's-complement),
//! and decodes to that representative rather than the input value.
//! [schema::Schema::encode_strict] rejects such values instead.
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use bitpack::field::Field;
//! use bitpack::schema::Schema;
//! use bitpack::value::Value;
//!
//! let schema = Schema::compile(&[
//!     Field::unsigned("state_flag", 3),
//!     Field::signed("head_yaw", 6),
//! ])
//! .unwrap();
//!
//! let values = BTreeMap::from([
//!     ("state_flag".to_string(), Value::U64(7)),
//!     ("head_yaw".to_string(), Value::I64(-30)),
//! ]);
//! let packed = schema.encode(&values).unwrap();
//! assert_eq!(schema.total_bits(), 9);
//! assert_eq!(schema.decode(&packed), values);
//! ```

pub mod bits;
pub mod errors;
pub mod field;
pub mod layout;
pub mod packed;
pub mod schema;
#[cfg(feature = "serde")]
pub mod serde;
pub mod value;
