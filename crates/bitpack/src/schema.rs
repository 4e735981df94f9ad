//! Schema: compiled, ordered set of field layouts used to encode named values
//! into a [Packed] integer and decode them back.

use std::collections::{BTreeMap, HashSet};

use crate::{
    errors::{EncodeError, SchemaError},
    field::{Field, FieldKind},
    layout::FieldLayout,
    packed::Packed,
    value::{FieldSink, FieldSource, Value},
};

/// A compiled schema: [FieldLayout]s in declaration order and the total bit length.
///
/// Use [Schema::compile] to build from [Field]s, then [Schema::encode] and
/// [Schema::decode]. A schema is immutable once built and can be shared across
/// threads freely.
///
/// Values that do not fit their field are silently truncated (unsigned) or
/// wrapped (signed) by [Schema::encode]; use [Schema::encode_strict] to reject them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    total_bits: usize,
    fields: Vec<FieldLayout>,
}

impl Schema {
    /// Compiles `fields` into a schema, assigning offsets left to right from bit 0.
    ///
    /// Fails if a width is outside `1..=64`, a name is empty, or two names collide.
    pub fn compile(fields: &[Field]) -> Result<Self, SchemaError> {
        let mut compiled_fields: Vec<FieldLayout> = Vec::with_capacity(fields.len());
        let mut names: HashSet<&str> = HashSet::with_capacity(fields.len());
        let mut total_bits = 0;

        for field in fields {
            if !names.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateFieldName(field.name.clone()));
            }

            let layout = FieldLayout::new(field, total_bits)?;

            if layout.kind == FieldKind::Signed && layout.width == 1 {
                log::warn!(
                    target: "bitpack",
                    "signed field `{}` is 1 bit wide and only holds -1 and 0",
                    layout.name
                );
            }
            log::trace!(
                target: "bitpack",
                "field `{}`: offset {}, width {}, {:?}",
                layout.name,
                layout.offset,
                layout.width,
                layout.kind
            );

            total_bits = layout.end();
            compiled_fields.push(layout);
        }

        log::debug!(
            target: "bitpack",
            "compiled schema: {} fields, {} bits",
            compiled_fields.len(),
            total_bits
        );

        Ok(Self {
            fields: compiled_fields,
            total_bits,
        })
    }

    /// Sum of all field widths.
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Bytes a transport needs to carry one packed value.
    pub fn byte_len(&self) -> usize {
        self.total_bits.div_ceil(8)
    }

    /// Compiled fields in declaration order.
    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    /// Looks a field up by name.
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Packs every field's value from `values` into one integer.
    ///
    /// Out-of-range values are truncated to their field width, not reported.
    /// Fails with [EncodeError::MissingField] if `values` lacks a declared field.
    pub fn encode<S: FieldSource + ?Sized>(&self, values: &S) -> Result<Packed, EncodeError> {
        self.encode_with(values, false)
    }

    /// Like [Schema::encode], but fails with [EncodeError::ValueOutOfRange] instead of truncating.
    pub fn encode_strict<S: FieldSource + ?Sized>(
        &self,
        values: &S,
    ) -> Result<Packed, EncodeError> {
        self.encode_with(values, true)
    }

    fn encode_with<S: FieldSource + ?Sized>(
        &self,
        values: &S,
        strict: bool,
    ) -> Result<Packed, EncodeError> {
        let mut packed = Packed::with_capacity(self.total_bits);

        for field in &self.fields {
            let value = values
                .field_value(&field.name)
                .ok_or_else(|| EncodeError::MissingField(field.name.clone()))?;
            if strict && !field.fits(value) {
                return Err(EncodeError::ValueOutOfRange(field.name.clone()));
            }
            field.insert(&mut packed, value);
        }

        Ok(packed)
    }

    /// Unpacks every field of `packed` into a map keyed by field name.
    pub fn decode(&self, packed: &Packed) -> BTreeMap<String, Value> {
        let mut map = BTreeMap::new();
        self.decode_into(packed, &mut map);
        map
    }

    /// Unpacks every field of `packed` into `sink`, in declaration order.
    ///
    /// Bits above [Schema::total_bits] are ignored.
    pub fn decode_into<S: FieldSink + ?Sized>(&self, packed: &Packed, sink: &mut S) {
        for field in &self.fields {
            sink.set_field_value(&field.name, field.extract(packed));
        }
    }
}

impl TryFrom<&[Field]> for Schema {
    type Error = SchemaError;

    fn try_from(fields: &[Field]) -> Result<Self, Self::Error> {
        Schema::compile(fields)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::SchemaDef> for Schema {
    type Error = SchemaError;

    fn try_from(def: crate::serde::SchemaDef) -> Result<Self, Self::Error> {
        let fields: Vec<Field> = def.fields.into_iter().map(Into::into).collect();
        Schema::compile(&fields)
    }
}
