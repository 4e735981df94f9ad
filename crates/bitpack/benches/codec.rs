use std::collections::BTreeMap;

use bitpack::{field::Field, packed::Packed, schema::Schema, value::Value};
use criterion::{Criterion, criterion_group, criterion_main};

fn entity_schema() -> Schema {
    Schema::compile(&[
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
    .unwrap()
}

fn entity_values() -> BTreeMap<String, Value> {
    BTreeMap::from([
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
    ])
}

fn gen_schema(field_count: usize) -> Schema {
    let fields: Vec<Field> = (0..field_count)
        .map(|i| Field::signed(format!("f{}", i), 16))
        .collect();

    Schema::compile(&fields).unwrap()
}

fn bench_entity(c: &mut Criterion) {
    let schema = entity_schema();
    let values = entity_values();
    let packed = schema.encode(&values).unwrap();

    c.bench_function("encode_entity_142_bits", |b| {
        b.iter(|| schema.encode(&values).unwrap())
    });

    c.bench_function("decode_entity_142_bits", |b| b.iter(|| schema.decode(&packed)));
}

fn bench_field_count(c: &mut Criterion) {
    for &field_count in &[1usize, 10, 50, 100] {
        let schema = gen_schema(field_count);

        // Deterministic but non-trivial pattern
        let words: Vec<u64> = (0..(field_count * 16).div_ceil(64))
            .map(|i| (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
            .collect();
        let packed = Packed::from_words(words);
        let values = schema.decode(&packed);

        c.bench_function(&format!("encode_{}_fields", field_count), |b| {
            b.iter(|| schema.encode(&values).unwrap())
        });
        c.bench_function(&format!("decode_{}_fields", field_count), |b| {
            b.iter(|| schema.decode(&packed))
        });
    }
}

criterion_group!(benches, bench_entity, bench_field_count);
criterion_main!(benches);
