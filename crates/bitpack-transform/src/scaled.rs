//! Per-field fixed-point codec for schemas whose values are real numbers.
//!
//! Each field may carry a `precision`. On encode a value `v` becomes
//! `round(v * precision)`, and on decode the slot value is divided by
//! `precision` again. Fields without one are rounded to the nearest integer.
//!
//! ```
//! use std::collections::BTreeMap;
//! use bitpack::field::Field;
//! use bitpack_transform::scaled::ScaledCodec;
//!
//! let codec = ScaledCodec::new(vec![
//!     (Field::signed("testvalue1", 32), Some(10_000.0)),
//!     (Field::unsigned("testvalue2", 24), None),
//! ])
//! .unwrap();
//!
//! let values = BTreeMap::from([
//!     ("testvalue1".to_string(), 160.2216),
//!     ("testvalue2".to_string(), 10.0),
//! ]);
//! let decoded = codec.decode(&codec.encode(&values).unwrap());
//! assert!((decoded["testvalue1"] - 160.2216).abs() < 1e-9);
//! assert_eq!(decoded["testvalue2"], 10.0);
//! ```

use std::collections::BTreeMap;

use bitpack::{
    errors::EncodeError,
    field::{Field, FieldKind},
    layout::FieldLayout,
    packed::Packed,
    schema::Schema,
    value::{FieldSource, Value},
};

use crate::{errors::CodecError, transform::FixedPoint};

/// A compiled schema plus an optional [FixedPoint] per field, in field order.
#[derive(Debug, Clone)]
pub struct ScaledCodec {
    schema: Schema,
    scales: Vec<Option<FixedPoint>>,
}

impl ScaledCodec {
    /// Compiles `fields`, pairing each with its precision.
    ///
    /// Fails on an invalid schema, or on a precision that is zero or non-finite.
    pub fn new<I>(fields: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = (Field, Option<f64>)>,
    {
        let (fields, precisions): (Vec<Field>, Vec<Option<f64>>) = fields.into_iter().unzip();
        let schema = Schema::compile(&fields)?;

        let scales = fields
            .iter()
            .zip(precisions)
            .map(|(field, precision)| {
                precision
                    .map(FixedPoint::new)
                    .transpose()
                    .map_err(|error| CodecError::Transform {
                        field: field.name.clone(),
                        error,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            target: "bitpack_transform",
            "scaled codec ready: {} bits, {} of {} fields scaled",
            schema.total_bits(),
            scales.iter().filter(|s| s.is_some()).count(),
            scales.len()
        );

        Ok(Self { schema, scales })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The precision declared for `name`, if the field exists and has one.
    pub fn precision(&self, name: &str) -> Option<f64> {
        self.layouts()
            .find(|(layout, _)| layout.name == name)
            .and_then(|(_, scale)| scale.map(|fp| fp.scale()))
    }

    /// Quantizes and packs `values`. Out-of-range results are truncated like any other value.
    pub fn encode(&self, values: &BTreeMap<String, f64>) -> Result<Packed, EncodeError> {
        self.schema.encode(&Quantized {
            codec: self,
            values,
        })
    }

    /// Unpacks every field and scales it back to a real number.
    pub fn decode(&self, packed: &Packed) -> BTreeMap<String, f64> {
        self.layouts()
            .map(|(layout, scale)| {
                let raw = layout.extract(packed).to_i128() as f64;
                let value = scale.map_or(raw, |fp| raw / fp.scale());
                (layout.name.clone(), value)
            })
            .collect()
    }

    fn layouts(&self) -> impl Iterator<Item = (&FieldLayout, Option<FixedPoint>)> {
        self.schema.fields().iter().zip(self.scales.iter().copied())
    }

    fn quantize(&self, name: &str, value: f64) -> Option<Value> {
        let (layout, scale) = self.layouts().find(|(layout, _)| layout.name == name)?;
        let raw = match scale {
            Some(fp) => fp.encode(value),
            None => value.round() as i64,
        };

        Some(match layout.kind {
            FieldKind::Signed => Value::I64(raw),
            FieldKind::Unsigned => u64::try_from(raw).map_or(Value::I64(raw), Value::U64),
        })
    }
}

#[cfg(feature = "serde")]
impl TryFrom<bitpack::serde::SchemaDef> for ScaledCodec {
    type Error = CodecError;

    fn try_from(def: bitpack::serde::SchemaDef) -> Result<Self, Self::Error> {
        ScaledCodec::new(def.fields.into_iter().map(|field| {
            let precision = field.precision;
            (Field::from(field), precision)
        }))
    }
}

/// Real-valued map seen through the codec's quantization.
struct Quantized<'a> {
    codec: &'a ScaledCodec,
    values: &'a BTreeMap<String, f64>,
}

impl FieldSource for Quantized<'_> {
    fn field_value(&self, name: &str) -> Option<Value> {
        let value = *self.values.get(name)?;
        self.codec.quantize(name, value)
    }
}
