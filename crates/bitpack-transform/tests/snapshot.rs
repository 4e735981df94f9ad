use std::collections::BTreeMap;

use bitpack::{field::Field, schema::Schema, value::Value};
use bitpack_transform::{
    snapshot::{EntitySnapshot, SnapshotCodec},
    transform::FixedPoint,
};
use proptest::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn entity_scenario_round_trips() {
    init();
    let schema = Schema::compile(&[
        Field::unsigned("effects", 12),
        Field::unsigned("anim_frame", 10),
        Field::unsigned("item_holding", 9),
        Field::unsigned("state_flag", 3),
        Field::signed("head_pitch", 6),
        Field::signed("head_yaw", 6),
        Field::unsigned("body_dir", 8),
        Field::signed("z", 32),
        Field::signed("y", 24),
        Field::signed("x", 32),
    ])
    .unwrap();
    assert_eq!(schema.total_bits(), 142);

    let values = BTreeMap::from([
        ("x".to_string(), Value::I64(-300_000_000)),
        ("y".to_string(), Value::I64(-69_420)),
        ("z".to_string(), Value::I64(-1_234_599)),
        ("body_dir".to_string(), Value::U64(215)),
        ("head_yaw".to_string(), Value::I64(-30)),
        ("head_pitch".to_string(), Value::I64(-23)),
        ("state_flag".to_string(), Value::U64(7)),
        ("item_holding".to_string(), Value::U64(189)),
        ("anim_frame".to_string(), Value::U64(489)),
        ("effects".to_string(), Value::U64(224)),
    ]);

    let packed = schema.encode(&values).unwrap();
    assert_eq!(packed.bit_len(), 142);
    assert_eq!(schema.decode(&packed), values);
}

#[test]
fn position_scaling_is_exact_for_whole_hundredths() {
    let position = FixedPoint::new(100.0).unwrap();
    let raw = position.encode(-3_000_000.00);
    assert_eq!(raw, -300_000_000);

    let codec = SnapshotCodec::new().unwrap();
    let snapshot = EntitySnapshot {
        x: -3_000_000.00,
        head_yaw: -1,
        head_pitch: -1,
        ..Default::default()
    };
    let decoded = codec.decode(&codec.encode(&snapshot).unwrap());
    assert_eq!(decoded.x, -3_000_000.0);
}

#[test]
fn snapshot_round_trips() {
    init();
    let codec = SnapshotCodec::new().unwrap();
    let snapshot = EntitySnapshot {
        x: -3_000_000.00,
        y: -694.20,
        z: -12_345.99,
        body_dir: 215,
        head_yaw: -30,
        head_pitch: -23,
        state_flag: 7,
        item_holding: 189,
        anim_frame: 489,
        effects: 0xE0,
    };

    let packed = codec.encode(&snapshot).unwrap();
    assert_eq!(codec.decode(&packed), snapshot);
}

#[test]
fn effects_truncate_to_twelve_bits() {
    let codec = SnapshotCodec::new().unwrap();
    let snapshot = EntitySnapshot {
        effects: 0x1FFF,
        anim_frame: 3,
        head_yaw: -1,
        head_pitch: -1,
        ..Default::default()
    };

    let packed = codec.encode(&snapshot).unwrap();
    assert_eq!(packed.read(0, 12), 0xFFF);

    let decoded = codec.decode(&packed);
    assert_eq!(decoded.effects, 0xFFF);
    assert_eq!(decoded.anim_frame, 3);
}

#[test]
fn positive_angle_wraps_under_bias() {
    let codec = SnapshotCodec::new().unwrap();
    let snapshot = EntitySnapshot {
        head_yaw: -64,
        head_pitch: 41,
        ..Default::default()
    };

    let decoded = codec.decode(&codec.encode(&snapshot).unwrap());
    assert_eq!(decoded.head_yaw, -64);
    assert_eq!(decoded.head_pitch, -23);
}

#[test]
fn state_flag_truncates_to_three_bits() {
    let codec = SnapshotCodec::new().unwrap();
    let snapshot = EntitySnapshot {
        state_flag: 9,
        head_yaw: -1,
        head_pitch: -1,
        ..Default::default()
    };

    let decoded = codec.decode(&codec.encode(&snapshot).unwrap());
    assert_eq!(decoded.state_flag, 1);
}

fn entity_snapshot() -> impl Strategy<Value = EntitySnapshot> {
    (
        (i32::MIN..=i32::MAX, -(1i32 << 23)..(1i32 << 23), i32::MIN..=i32::MAX),
        (any::<u8>(), -64i8..=-1, -64i8..=-1, 0u8..8),
        (0u16..512, 0u16..1024, 0u16..4096),
    )
        .prop_map(
            |((x, y, z), (body_dir, head_yaw, head_pitch, state_flag), (item_holding, anim_frame, effects))| {
                EntitySnapshot {
                    x: x as f64 / 100.0,
                    y: y as f64 / 100.0,
                    z: z as f64 / 100.0,
                    body_dir,
                    head_yaw,
                    head_pitch,
                    state_flag,
                    item_holding,
                    anim_frame,
                    effects,
                }
            },
        )
}

proptest! {
    #[test]
    fn in_range_snapshots_round_trip(snapshot in entity_snapshot()) {
        let codec = SnapshotCodec::new().unwrap();
        let packed = codec.encode(&snapshot).unwrap();

        prop_assert!(packed.bit_len() <= 142);
        prop_assert_eq!(codec.decode(&packed), snapshot);
    }
}
