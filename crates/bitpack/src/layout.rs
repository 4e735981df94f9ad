//! Compiled per-field metadata: where a field lives in the packed value and how
//! its bits are interpreted.

use crate::{
    bits::low_mask,
    errors::SchemaError,
    field::{Field, FieldKind},
    packed::Packed,
    value::Value,
};

/// A [Field] placed at a fixed bit offset. Built by [crate::schema::Schema::compile].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: String,
    pub width: usize,
    pub kind: FieldKind,
    /// Position of the field's least significant bit in the packed value.
    pub offset: usize,
    /// `(1 << width) - 1`.
    pub mask: u64,
    /// Most significant bit of the slot for signed fields, 0 otherwise.
    pub sign_bit: u64,
    /// `1 << width` for signed fields, 0 otherwise.
    pub modulus: u128,
}

impl FieldLayout {
    /// Places `field` at `offset`. Fails if the width is outside `1..=64` or the name is empty.
    pub fn new(field: &Field, offset: usize) -> Result<Self, SchemaError> {
        if field.name.is_empty() {
            return Err(SchemaError::InvalidFieldName);
        }

        if field.width == 0 || field.width > 64 {
            return Err(SchemaError::InvalidFieldSize {
                name: field.name.clone(),
                width: field.width,
            });
        }

        let (sign_bit, modulus) = match field.kind {
            FieldKind::Unsigned => (0, 0),
            FieldKind::Signed => (1u64 << (field.width - 1), 1u128 << field.width),
        };

        Ok(FieldLayout {
            name: field.name.clone(),
            width: field.width,
            kind: field.kind,
            offset,
            mask: low_mask(field.width),
            sign_bit,
            modulus,
        })
    }

    /// First bit past the field.
    pub fn end(&self) -> usize {
        self.offset + self.width
    }

    /// Smallest value the field holds exactly.
    pub fn min(&self) -> i128 {
        match self.kind {
            FieldKind::Unsigned => 0,
            FieldKind::Signed => -(self.sign_bit as i128),
        }
    }

    /// Largest value the field holds exactly.
    pub fn max(&self) -> i128 {
        match self.kind {
            FieldKind::Unsigned => self.mask as i128,
            FieldKind::Signed => self.sign_bit as i128 - 1,
        }
    }

    /// Whether `value` survives a round trip through this field unchanged.
    pub fn fits(&self, value: Value) -> bool {
        (self.min()..=self.max()).contains(&value.to_i128())
    }

    /// Reduces `value` to the field's `width`-bit slot pattern.
    ///
    /// Never fails: bits above `width` are dropped, so out-of-range values
    /// come back as their truncated (unsigned) or wrapped (signed) representative.
    pub fn slot(&self, value: Value) -> u64 {
        let v = value.to_i128();
        let v = match self.kind {
            FieldKind::Signed if v < 0 => v + self.modulus as i128,
            _ => v,
        };
        (v as u64) & self.mask
    }

    /// Interprets a `width`-bit slot pattern as this field's value.
    pub fn value_of(&self, slot: u64) -> Value {
        let slot = slot & self.mask;
        match self.kind {
            FieldKind::Unsigned => Value::U64(slot),
            FieldKind::Signed if slot & self.sign_bit != 0 => {
                Value::I64((slot as i128 - self.modulus as i128) as i64)
            }
            FieldKind::Signed => Value::I64(slot as i64),
        }
    }

    /// ORs the field's slot for `value` into `packed`.
    pub fn insert(&self, packed: &mut Packed, value: Value) {
        packed.or_slot(self.offset, self.width, self.slot(value));
    }

    /// Reads this field's value out of `packed`.
    pub fn extract(&self, packed: &Packed) -> Value {
        self.value_of(packed.read(self.offset, self.width))
    }
}
