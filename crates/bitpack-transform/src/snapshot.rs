//! Entity snapshot codec: position, orientation, animation state, held item,
//! status flags and effects packed into one 142-bit value.
//!
//! Encoding runs `EntitySnapshot -> quantize/bias -> RawSnapshot -> Schema::encode`;
//! decoding runs the same pipeline backwards.
//!
//! | field          | bits | stored as                            |
//! |----------------|------|--------------------------------------|
//! | `effects`      | 12   | unsigned                             |
//! | `anim_frame`   | 10   | unsigned                             |
//! | `item_holding` | 9    | unsigned                             |
//! | `state_flag`   | 3    | unsigned                             |
//! | `head_pitch`   | 6    | unsigned, biased by +64              |
//! | `head_yaw`     | 6    | unsigned, biased by +64              |
//! | `body_dir`     | 8    | unsigned                             |
//! | `z`            | 32   | signed, fixed-point x100             |
//! | `y`            | 24   | signed, fixed-point x100             |
//! | `x`            | 32   | signed, fixed-point x100             |
//!
//! A +64 bias in a 6-bit slot leaves `[-64, -1]` as the exact angle range.
//! Other angles wrap: `41` comes back as `-23`.

use bitpack::{
    errors::EncodeError,
    field::Field,
    packed::Packed,
    schema::Schema,
    value::{FieldSink, FieldSource, Value},
};

use crate::{
    errors::CodecError,
    transform::{Bias, FixedPoint},
};

/// Fixed-point scale for positions: 1/100 unit precision.
pub const POSITION_SCALE: f64 = 100.0;
/// Offset-binary bias for head angles.
pub const ANGLE_BIAS: i64 = 64;

/// Snapshot fields in packing order, least significant first.
pub fn snapshot_fields() -> Vec<Field> {
    vec![
        Field::unsigned("effects", 12),
        Field::unsigned("anim_frame", 10),
        Field::unsigned("item_holding", 9),
        Field::unsigned("state_flag", 3),
        Field::unsigned("head_pitch", 6),
        Field::unsigned("head_yaw", 6),
        Field::unsigned("body_dir", 8),
        Field::signed("z", 32),
        Field::signed("y", 24),
        Field::signed("x", 32),
    ]
}

/// Real-time state of one entity, in domain units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntitySnapshot {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub body_dir: u8,
    pub head_yaw: i8,
    pub head_pitch: i8,
    pub state_flag: u8,
    pub item_holding: u16,
    pub anim_frame: u16,
    /// Effect bitmask.
    pub effects: u16,
}

/// Snapshot after quantization and biasing: exactly what goes into each slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSnapshot {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub body_dir: u64,
    pub head_yaw: u64,
    pub head_pitch: u64,
    pub state_flag: u64,
    pub item_holding: u64,
    pub anim_frame: u64,
    pub effects: u64,
}

impl FieldSource for RawSnapshot {
    fn field_value(&self, name: &str) -> Option<Value> {
        let value = match name {
            "x" => Value::I64(self.x),
            "y" => Value::I64(self.y),
            "z" => Value::I64(self.z),
            "body_dir" => Value::U64(self.body_dir),
            "head_yaw" => Value::U64(self.head_yaw),
            "head_pitch" => Value::U64(self.head_pitch),
            "state_flag" => Value::U64(self.state_flag),
            "item_holding" => Value::U64(self.item_holding),
            "anim_frame" => Value::U64(self.anim_frame),
            "effects" => Value::U64(self.effects),
            _ => return None,
        };
        Some(value)
    }
}

impl RawSnapshot {
    fn signed_slot(&mut self, name: &str) -> Option<&mut i64> {
        match name {
            "x" => Some(&mut self.x),
            "y" => Some(&mut self.y),
            "z" => Some(&mut self.z),
            _ => None,
        }
    }

    fn unsigned_slot(&mut self, name: &str) -> Option<&mut u64> {
        match name {
            "body_dir" => Some(&mut self.body_dir),
            "head_yaw" => Some(&mut self.head_yaw),
            "head_pitch" => Some(&mut self.head_pitch),
            "state_flag" => Some(&mut self.state_flag),
            "item_holding" => Some(&mut self.item_holding),
            "anim_frame" => Some(&mut self.anim_frame),
            "effects" => Some(&mut self.effects),
            _ => None,
        }
    }
}

/// Values that do not fit the slot's type (a negative unsigned, or a `U64`
/// above `i64::MAX` for a position) leave the slot unchanged.
impl FieldSink for RawSnapshot {
    fn set_field_value(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.signed_slot(name) {
            if let Some(v) = value.as_i64() {
                *slot = v;
            }
        } else if let Some(slot) = self.unsigned_slot(name) {
            if let Some(v) = value.as_u64() {
                *slot = v;
            }
        }
    }
}

/// Encodes and decodes [EntitySnapshot]s. Build once and share; it holds no mutable state.
#[derive(Debug, Clone)]
pub struct SnapshotCodec {
    schema: Schema,
    position: FixedPoint,
    angle: Bias,
}

impl SnapshotCodec {
    pub fn new() -> Result<Self, CodecError> {
        let schema = Schema::compile(&snapshot_fields())?;
        let position =
            FixedPoint::new(POSITION_SCALE).map_err(|error| CodecError::Transform {
                field: "x".to_string(),
                error,
            })?;

        log::debug!(
            target: "bitpack_transform",
            "snapshot codec ready: {} bits, position scale {}, angle bias {}",
            schema.total_bits(),
            POSITION_SCALE,
            ANGLE_BIAS
        );

        Ok(Self {
            schema,
            position,
            angle: Bias::new(ANGLE_BIAS),
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Quantizes positions and biases angles.
    pub fn to_raw(&self, snapshot: &EntitySnapshot) -> RawSnapshot {
        RawSnapshot {
            x: self.position.encode(snapshot.x),
            y: self.position.encode(snapshot.y),
            z: self.position.encode(snapshot.z),
            body_dir: snapshot.body_dir as u64,
            head_yaw: self.angle.encode(snapshot.head_yaw as i64),
            head_pitch: self.angle.encode(snapshot.head_pitch as i64),
            state_flag: snapshot.state_flag as u64,
            item_holding: snapshot.item_holding as u64,
            anim_frame: snapshot.anim_frame as u64,
            effects: snapshot.effects as u64,
        }
    }

    /// Inverse of [SnapshotCodec::to_raw] for values read back from the schema.
    ///
    /// Every slot is at most as wide as its target type, so the narrowing casts are lossless
    /// for decoded input.
    pub fn from_raw(&self, raw: &RawSnapshot) -> EntitySnapshot {
        EntitySnapshot {
            x: self.position.decode(raw.x),
            y: self.position.decode(raw.y),
            z: self.position.decode(raw.z),
            body_dir: raw.body_dir as u8,
            head_yaw: self.angle.decode(raw.head_yaw) as i8,
            head_pitch: self.angle.decode(raw.head_pitch) as i8,
            state_flag: raw.state_flag as u8,
            item_holding: raw.item_holding as u16,
            anim_frame: raw.anim_frame as u16,
            effects: raw.effects as u16,
        }
    }

    /// Packs `snapshot`. Out-of-range values are truncated, not reported.
    pub fn encode(&self, snapshot: &EntitySnapshot) -> Result<Packed, EncodeError> {
        self.schema.encode(&self.to_raw(snapshot))
    }

    pub fn decode(&self, packed: &Packed) -> EntitySnapshot {
        let mut raw = RawSnapshot::default();
        self.schema.decode_into(packed, &mut raw);
        self.from_raw(&raw)
    }
}
